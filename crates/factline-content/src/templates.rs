//! Template pools, keyed by category.
//!
//! Every category variant has its own pool; there is no generic
//! fallback set, so an unknown category cannot silently pick up
//! mismatched templates.

use factline_models::Category;

/// Title templates. `{}` placeholders are interpolated with the
/// category's filler pool.
pub fn title_pool(category: Category) -> &'static [&'static str] {
    match category {
        Category::Geography => &[
            "10 Countries That Technically Don't Exist",
            "Mind-Blowing Facts About {} Countries",
            "Countries With the Weirdest Laws You Won't Believe",
            "10 Places on Earth That Look Like Another Planet",
        ],
        Category::History => &[
            "Historical Events That Changed Everything",
            "10 Mysteries From History We Still Can't Solve",
            "Shocking Facts About {} That Schools Don't Teach",
            "Historical Figures Who Were Actually Terrible People",
        ],
        Category::Science => &[
            "Scientific Facts That Will Blow Your Mind",
            "10 Scientific Discoveries That Shocked the World",
            "Science Facts That Sound Fake But Are True",
            "Mind-Bending Scientific Phenomena Explained",
        ],
        Category::Technology => &[
            "10 Technologies That Are Quietly Changing Your Life",
            "Tech Breakthroughs That Sound Like Science Fiction",
            "10 Inventions That Arrived Decades Too Early",
            "Technology Facts Engineers Don't Talk About",
        ],
        Category::Psychology => &[
            "10 Psychological Effects You Experience Every Day",
            "Mind Tricks Your Brain Plays On You",
            "10 Psychology Facts That Explain Everyone You Know",
            "The Strangest Experiments In Psychology History",
        ],
        Category::Space => &[
            "10 Space Facts That Will Make You Feel Tiny",
            "The Strangest Objects Ever Found In Space",
            "10 Things About the Universe Nobody Can Explain",
            "Space Discoveries That Changed Astronomy Forever",
        ],
        Category::Trending => &[
            "10 Facts Everyone Is Talking About Right Now",
            "The Most Surprising Facts Of The Week",
            "10 Things You Missed While Scrolling",
            "Facts Too Interesting Not To Share",
        ],
    }
}

/// Filler words for `{}` placeholders in title templates.
pub fn title_fillers(category: Category) -> &'static [&'static str] {
    match category {
        Category::Geography => &["Amazing", "Incredible", "Shocking"],
        Category::History => &["Ancient Times", "The Past", "World History"],
        // Remaining pools carry no placeholders; the category name covers
        // any stray `{}`.
        _ => &[],
    }
}

/// Hook templates. `{}` is interpolated with the category name.
pub const HOOKS: [&str; 5] = [
    "You won't believe what I discovered about {}...",
    "Most people have no idea that {}...",
    "This is going to completely change how you think about {}...",
    "I spent hours researching this, and what I found shocked me...",
    "Number 3 on this list will absolutely blow your mind...",
];

/// SEO tag sets, one per category.
pub fn tags(category: Category) -> &'static [&'static str] {
    match category {
        Category::Geography => &["countries", "geography", "world facts", "travel", "educational"],
        Category::History => &["history", "historical facts", "ancient", "past events", "educational"],
        Category::Science => &["science", "scientific facts", "discoveries", "research", "educational"],
        Category::Space => &["space", "astronomy", "nasa", "universe", "cosmos"],
        Category::Technology => &["technology", "tech facts", "innovation", "future", "gadgets"],
        Category::Psychology => &["psychology", "mind", "human behavior", "mental health", "educational"],
        Category::Trending => &["educational", "facts", "top 10"],
    }
}
