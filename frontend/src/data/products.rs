#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Wearables,
    SmartHome,
    Mobility,
    Audio,
    Health,
    Computing,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Wearables,
        Category::SmartHome,
        Category::Mobility,
        Category::Audio,
        Category::Health,
        Category::Computing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Wearables => "Wearables",
            Category::SmartHome => "Smart Home",
            Category::Mobility => "Mobility",
            Category::Audio => "Audio",
            Category::Health => "Health",
            Category::Computing => "Computing",
        }
    }

    /// Element id of the chapter holding this category on the showcase page.
    pub fn anchor(self) -> &'static str {
        match self {
            Category::Wearables => "chapter-wearables",
            Category::SmartHome => "chapter-smart-home",
            Category::Mobility => "chapter-mobility",
            Category::Audio => "chapter-audio",
            Category::Health => "chapter-health",
            Category::Computing => "chapter-computing",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub company: &'static str,
    pub category: Category,
    pub category_tag: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub youtube: Option<&'static str>,
    pub website: Option<&'static str>,
}

pub static PRODUCTS: &[Product] = &[
    Product {
        id: "halo-ring",
        name: "Halo Ring",
        company: "Aster & Vale",
        category: Category::Wearables,
        category_tag: "Sleep tracking",
        description: "A titanium smart ring that tracks sleep stages, skin temperature and recovery with a seven-day battery.",
        image: "/assets/products/halo-ring.jpg",
        youtube: Some("https://www.youtube.com/watch?v=Hq3rT8pLx2A"),
        website: Some("https://astervale.example.com/halo"),
    },
    Product {
        id: "strata-band",
        name: "Strata Band",
        company: "Kinetiq",
        category: Category::Wearables,
        category_tag: "Fitness",
        description: "A screenless training band with on-device strain coaching and swappable fabric straps.",
        image: "/assets/products/strata-band.jpg",
        youtube: Some("https://youtu.be/Kt7bV2mQw9s"),
        website: Some("https://kinetiq.example.com/strata"),
    },
    Product {
        id: "lumen-hub",
        name: "Lumen Hub",
        company: "Pebblestone Home",
        category: Category::SmartHome,
        category_tag: "Home automation",
        description: "A Matter and Thread border router disguised as a bedside lamp, with local-only automations.",
        image: "/assets/products/lumen-hub.jpg",
        youtube: Some("https://www.youtube.com/embed/Lm4nH8cZr1Q"),
        website: Some("https://pebblestone.example.com/lumen"),
    },
    Product {
        id: "porch-sentinel",
        name: "Porch Sentinel",
        company: "Pebblestone Home",
        category: Category::SmartHome,
        category_tag: "Security",
        description: "A battery video doorbell with radar presence detection and on-device package recognition.",
        image: "/assets/products/porch-sentinel.jpg",
        youtube: None,
        website: Some("https://pebblestone.example.com/sentinel"),
    },
    Product {
        id: "glide-one",
        name: "Glide One",
        company: "Northwind Mobility",
        category: Category::Mobility,
        category_tag: "E-scooter",
        description: "A folding electric scooter with self-sealing tyres, regenerative braking and a 45 km range.",
        image: "/assets/products/glide-one.jpg",
        youtube: Some("https://www.youtube.com/watch?v=Gl1dE0neR7x&t=12"),
        website: Some("https://northwind.example.com/glide"),
    },
    Product {
        id: "cargo-pod",
        name: "Cargo Pod",
        company: "Northwind Mobility",
        category: Category::Mobility,
        category_tag: "E-bike",
        description: "A compact longtail cargo e-bike with a mid-drive motor and a child seat rated for two.",
        image: "/assets/products/cargo-pod.jpg",
        youtube: Some("https://youtu.be/Cp9oD4kYt2M"),
        website: None,
    },
    Product {
        id: "orbit-buds",
        name: "Orbit Buds",
        company: "Orbit Audio",
        category: Category::Audio,
        category_tag: "Earbuds",
        description: "Open-ear earbuds with bone-conduction voice pickup and lossless LE Audio streaming.",
        image: "/assets/products/orbit-buds.jpg",
        youtube: Some("https://www.youtube.com/watch?v=Ob7uD5sPq3W"),
        website: Some("https://orbitaudio.example.com/buds"),
    },
    Product {
        id: "monolith-speaker",
        name: "Monolith",
        company: "Orbit Audio",
        category: Category::Audio,
        category_tag: "Speakers",
        description: "A room-filling bookshelf speaker that calibrates itself to the room using a ring of microphones.",
        image: "/assets/products/monolith.jpg",
        youtube: None,
        website: Some("https://orbitaudio.example.com/monolith"),
    },
    Product {
        id: "tide-cuff",
        name: "Tide Cuff",
        company: "Tidewater Health",
        category: Category::Health,
        category_tag: "Blood pressure",
        description: "A cuffless blood pressure monitor worn on the upper arm, cleared for home use.",
        image: "/assets/products/tide-cuff.jpg",
        youtube: Some("https://youtu.be/Td2cF8hLm5N"),
        website: Some("https://tidewater.example.com/cuff"),
    },
    Product {
        id: "breath-lab",
        name: "Breath Lab",
        company: "Tidewater Health",
        category: Category::Health,
        category_tag: "Metabolism",
        description: "A pocket breath analyser that estimates fat-burn state from exhaled acetone.",
        image: "/assets/products/breath-lab.jpg",
        youtube: Some("not-a-video-link"),
        website: None,
    },
    Product {
        id: "fold-slate",
        name: "Fold Slate",
        company: "Quanta Works",
        category: Category::Computing,
        category_tag: "Laptop",
        description: "A 17-inch foldable OLED laptop that collapses to a 12-inch slate with a magnetic keyboard.",
        image: "/assets/products/fold-slate.jpg",
        youtube: Some("https://www.youtube.com/watch?v=Fs5lA7tEq8K"),
        website: Some("https://quanta.example.com/fold-slate"),
    },
    Product {
        id: "pocket-cluster",
        name: "Pocket Cluster",
        company: "Quanta Works",
        category: Category::Computing,
        category_tag: "Mini PC",
        description: "A palm-sized AI workstation with a 50 TOPS NPU and dual 10 GbE for local model serving.",
        image: "/assets/products/pocket-cluster.jpg",
        youtube: None,
        website: Some("https://quanta.example.com/pocket-cluster"),
    },
];

pub fn find_product(id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|product| product.id == id)
}

pub fn products_in(category: Category) -> impl Iterator<Item = &'static Product> {
    PRODUCTS.iter().filter(move |product| product.category == category)
}

/// Categories that have at least one product, in declaration order.
pub fn populated_categories() -> Vec<Category> {
    Category::ALL
        .into_iter()
        .filter(|category| products_in(*category).next().is_some())
        .collect()
}
