use nd_core::Category;

use crate::normalize::ArticleDraft;

/// Keyword substrings per category, matched against lowercased text. The
/// category enumeration order is the precedence order: the first category
/// with any hit wins, and `Category::DEFAULT` catches everything else.
fn keywords(category: Category) -> &'static [&'static str] {
    match category {
        Category::Politics => &[
            "politic",
            "election",
            "government",
            "parliament",
            "minister",
            "cabinet",
            "senate",
            "congress",
            "policy",
            "vote",
            "diplomat",
            "legislation",
        ],
        Category::Science => &[
            "science",
            "research",
            "study finds",
            "space",
            "satellite",
            "nasa",
            "isro",
            "telescope",
            "quantum",
            "vaccine",
            "genome",
            "laboratory",
        ],
        Category::Climate => &[
            "climate",
            "emission",
            "carbon",
            "renewable",
            "pollution",
            "warming",
            "sustainab",
            "drought",
            "wildfire",
            "monsoon",
            "net zero",
        ],
        Category::Entertainment => &[
            "film",
            "movie",
            "music",
            "celebrity",
            "festival",
            "concert",
            "streaming",
            "bollywood",
            "hollywood",
            "cricket",
            "football",
            "tennis",
            "sport",
        ],
        Category::Art => &[
            "museum",
            "gallery",
            "exhibition",
            "sculpture",
            "painting",
            "artist",
            "theatre",
            "opera",
            "heritage",
        ],
        Category::Technology => &[
            "tech",
            "software",
            "startup",
            "smartphone",
            "internet",
            "cyber",
            "robot",
            "artificial intelligence",
            "semiconductor",
            "digital",
        ],
    }
}

/// Deterministic first-match classification over the draft's combined text.
pub fn classify(draft: &ArticleDraft) -> Category {
    let blob = [
        draft.title.as_str(),
        draft.description.as_deref().unwrap_or(""),
        draft.body_text.as_deref().unwrap_or(""),
        draft.source_name.as_str(),
    ]
    .join(" ")
    .to_lowercase();

    Category::ALL
        .into_iter()
        .find(|category| {
            keywords(*category)
                .iter()
                .any(|keyword| blob.contains(keyword))
        })
        .unwrap_or(Category::DEFAULT)
}
