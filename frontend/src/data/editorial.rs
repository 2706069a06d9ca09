use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub slug: &'static str,
    pub title: &'static str,
    pub author: &'static str,
    pub published: (i32, u32, u32),
    pub summary: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Episode {
    pub number: u32,
    pub title: &'static str,
    pub guests: &'static [&'static str],
    pub published: (i32, u32, u32),
    pub duration_minutes: u32,
    pub audio_url: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PressRelease {
    pub headline: &'static str,
    pub published: (i32, u32, u32),
    pub body: &'static str,
}

pub static ARTICLES: &[Article] = &[
    Article {
        slug: "rings-are-the-new-watches",
        title: "Rings are the new watches",
        author: "Mara Ellison",
        published: (2026, 1, 9),
        summary: "Why three of the show's best health trackers chose your finger over your wrist.",
        image: "/assets/magazine/rings.jpg",
    },
    Article {
        slug: "the-quiet-home",
        title: "The quiet home",
        author: "Idris Okafor",
        published: (2026, 1, 12),
        summary: "Local-first automation finally works without a cloud account. We tried it for a week.",
        image: "/assets/magazine/quiet-home.jpg",
    },
    Article {
        slug: "micromobility-grows-up",
        title: "Micromobility grows up",
        author: "Lena Park",
        published: (2026, 1, 15),
        summary: "Cargo bikes, self-sealing tyres and the end of the rental scooter era.",
        image: "/assets/magazine/micromobility.jpg",
    },
];

pub static EPISODES: &[Episode] = &[
    Episode {
        number: 1,
        title: "Opening day on the floor",
        guests: &["Mara Ellison"],
        published: (2026, 1, 7),
        duration_minutes: 42,
        audio_url: "/assets/podcast/ep01.mp3",
    },
    Episode {
        number: 2,
        title: "Is on-device AI real yet?",
        guests: &["Idris Okafor", "Quanta Works"],
        published: (2026, 1, 10),
        duration_minutes: 51,
        audio_url: "/assets/podcast/ep02.mp3",
    },
    Episode {
        number: 3,
        title: "Hearing health and open-ear audio",
        guests: &["Orbit Audio"],
        published: (2026, 1, 14),
        duration_minutes: 38,
        audio_url: "/assets/podcast/ep03.mp3",
    },
];

pub static PRESS_RELEASES: &[PressRelease] = &[
    PressRelease {
        headline: "Showfloor announces its 2026 Best of Show shortlist",
        published: (2026, 1, 8),
        body: "Twelve products across six categories make this year's shortlist, selected by our editorial panel after four days of hands-on testing.",
    },
    PressRelease {
        headline: "Showfloor podcast returns for a second season",
        published: (2026, 1, 3),
        body: "Daily episodes recorded live from the show floor, featuring founders and engineers behind the year's launches.",
    },
];

pub fn publish_date((year, month, day): (i32, u32, u32)) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

pub fn format_date(published: (i32, u32, u32)) -> String {
    publish_date(published)
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_default()
}

/// Newest first; entries with an impossible date sink to the end.
pub fn newest_first<T>(items: &'static [T], date: impl Fn(&T) -> (i32, u32, u32)) -> Vec<&'static T> {
    let mut sorted: Vec<&'static T> = items.iter().collect();
    sorted.sort_by(|a, b| publish_date(date(b)).cmp(&publish_date(date(a))));
    sorted
}
