use crate::sources::RawRecord;

/// Bundled, pre-vetted headlines shown only when every live source comes up
/// empty. Bump the version when the set is re-curated.
pub const FALLBACK_VERSION: &str = "2024-11";

struct FallbackEntry {
    title: &'static str,
    url: &'static str,
    image_url: Option<&'static str>,
    author: Option<&'static str>,
    description: &'static str,
    body_text: &'static str,
    source_name: &'static str,
}

const ENTRIES: &[FallbackEntry] = &[
    FallbackEntry {
        title: "Indian economy posts resilient growth as services surge in Q2 FY25",
        url: "https://www.thehindu.com/business/Economy/indian-economy-posts-resilient-growth-as-services-surge-in-q2-fy25/article68642044.ece",
        image_url: Some("https://www.thehindu.com/incoming/nrwj1s/article68642045.ece/ALTERNATES/LANDSCAPE_1200/INDIA%20ECONOMY.JPG"),
        author: Some("The Hindu Bureau"),
        description: "India\u{2019}s GDP held firm in the second quarter of FY25 as resilient services demand and capital expenditure kept growth on track despite global headwinds.",
        body_text: "Fresh GDP estimates highlight resilient services demand, robust government capex, and steady consumption, underscoring the Indian economy\u{2019}s continued strength in FY25.",
        source_name: "The Hindu",
    },
    FallbackEntry {
        title: "ISRO successfully tests reusable launch vehicle prototype in Karnataka",
        url: "https://www.isro.gov.in/ISRO_reusable_launch_vehicle_update.html",
        image_url: Some("https://www.isro.gov.in/media_isro/image_gallery/rlv/rlv_landing.jpg"),
        author: Some("ISRO Team"),
        description: "The space agency completed a critical landing experiment for its reusable launch vehicle, advancing efforts to make access to space more affordable.",
        body_text: "The prototype executed a precision approach and autonomous landing in Karnataka, marking a major milestone for ISRO\u{2019}s plans to develop reusable space transportation systems.",
        source_name: "ISRO",
    },
    FallbackEntry {
        title: "Women\u{2019}s cricket team seals T20 series against Australia with clinical chase",
        url: "https://sports.ndtv.com/cricket/india-vs-australia-t20-series-decider-report-6283349",
        image_url: Some("https://c.ndtvimg.com/2024-11/t3f51upo_india-women-twitter_625x300_11_November_24.jpg"),
        author: Some("NDTV Sports Desk"),
        description: "Smriti Mandhana\u{2019}s composed half-century anchored India\u{2019}s successful chase to clinch the T20 series against Australia in Mumbai.",
        body_text: "A disciplined bowling effort restricted Australia before India\u{2019}s top order sealed the game with a confident chase, delivering a morale-boosting series win for the women in blue.",
        source_name: "NDTV Sports",
    },
    FallbackEntry {
        title: "Delhi unveils comprehensive air quality action plan ahead of winter",
        url: "https://indianexpress.com/article/cities/delhi/delhi-air-quality-action-plan-2024-9283315/",
        image_url: Some("https://images.indianexpress.com/2024/10/delhi-pollution-3.jpg"),
        author: Some("Express News Service"),
        description: "The Delhi government outlined a winter action plan that deploys anti-smog guns, mechanised sweeping, and stricter construction norms to curb pollution.",
        body_text: "Officials detailed a multi-agency strategy focusing on controlling dust, monitoring industrial emissions, and managing crop residue burning to keep AQI levels in check.",
        source_name: "The Indian Express",
    },
    FallbackEntry {
        title: "Union Cabinet approves ambitious green hydrogen corridors project",
        url: "https://economictimes.indiatimes.com/industry/energy/power/cabinet-approves-green-hydrogen-corridors-project/articleshow/112423450.cms",
        image_url: Some("https://img.etimg.com/thumb/msid-112423481,width-1200,height-900,imgsize-123456,resizemode-8,quality-100/green-hydrogen.jpg"),
        author: Some("ET Energy World"),
        description: "A new policy push will establish dedicated corridors and incentives to accelerate India\u{2019}s transition to green hydrogen for heavy industries and mobility.",
        body_text: "The approval unlocks funding for infrastructure, electrolyser manufacturing, and pilot projects, signalling India\u{2019}s commitment to emerging as a global green hydrogen hub.",
        source_name: "The Economic Times",
    },
    FallbackEntry {
        title: "Kerala launches first-of-its-kind digital health mission for telemedicine",
        url: "https://www.livemint.com/news/india/kerala-launches-digital-health-mission-telemedicine-11727364577098.html",
        image_url: Some("https://images.livemint.com/img/2024/10/18/600x338/telemedicine_kerala_1697623456123_1697623461559.jpg"),
        author: Some("Mint Health Desk"),
        description: "The Kerala government rolled out a digital health mission that links telemedicine services with hospitals to improve access to specialists across the state.",
        body_text: "Doctors can now consult patients remotely using a unified digital platform, with electronic health records ensuring continuity of care for rural communities.",
        source_name: "Mint",
    },
    FallbackEntry {
        title: "Start-up ecosystem sees record funding in climate-tech ventures this year",
        url: "https://www.financialexpress.com/business/startups/start-up-ecosystem-sees-record-funding-in-climate-tech-ventures-this-year-3550021/",
        image_url: Some("https://www.financialexpress.com/wp-content/uploads/2024/09/Climate-tech-startups.jpg"),
        author: Some("Financial Express Bureau"),
        description: "Investors poured record capital into Indian climate-tech start-ups, backing innovations in energy storage, mobility, and carbon management.",
        body_text: "Analysts say the sustained funding momentum highlights the urgency to scale solutions that help industries and cities meet net-zero commitments.",
        source_name: "Financial Express",
    },
    FallbackEntry {
        title: "Indian Railways introduces AI-powered monitoring to enhance safety",
        url: "https://www.moneycontrol.com/news/business/indian-railways-introduces-ai-powered-monitoring-to-enhance-safety-article-12567321.html",
        image_url: Some("https://images.moneycontrol.com/static-mcnews/2024/03/Indian-Railways-770x433.jpg"),
        author: Some("Moneycontrol News"),
        description: "A network of AI-enabled cameras and sensors will now monitor tracks and rolling stock in real time to prevent accidents and improve punctuality.",
        body_text: "The system analyses live footage and diagnostics to alert crews about potential hazards, forming part of Indian Railways\u{2019} larger safety modernisation drive.",
        source_name: "Moneycontrol",
    },
];

/// The fallback set as raw records, so it runs through exactly the same
/// normalize-and-classify path as live data.
pub fn raw_records() -> Vec<RawRecord> {
    ENTRIES
        .iter()
        .map(|entry| RawRecord {
            title: Some(entry.title.to_string()),
            url: Some(entry.url.to_string()),
            image_url: entry.image_url.map(str::to_string),
            author: entry.author.map(str::to_string),
            description: Some(entry.description.to_string()),
            body_text: Some(entry.body_text.to_string()),
            published_at: None,
            source_name: Some(entry.source_name.to_string()),
        })
        .collect()
}
