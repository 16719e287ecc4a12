//! 画面に表示する静的コンテンツ
//!
//! ホーム画面の解説カード、チーム紹介、各画面の見出し。

/// 画面上部の見出し
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageHero {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HOME_HERO: PageHero = PageHero {
    title: "Coffee Leaf Nutrition Analysis",
    description: "Understanding nutrient deficiencies in coffee plants for optimal crop health",
};

pub const ANALYSIS_HERO: PageHero = PageHero {
    title: "Intelligent Leaf Nutrition Analysis",
    description: "Upload a coffee leaf image to detect nutrient deficiencies using advanced AI technology and receive personalized recommendations for optimal plant health",
};

pub const TEAM_HERO: PageHero = PageHero {
    title: "Meet Our Team",
    description: "The dedicated professionals behind the Coffee Leaf Nutrition Prediction System",
};

/// カード画像。読み込み失敗時は `fallback` に一度だけ差し替える
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardImage {
    pub src: &'static str,
    pub alt: &'static str,
    pub fallback: Option<&'static str>,
}

/// カード本文のブロック
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Text(&'static str),
    Heading(&'static str),
    /// 太字ラベル付きの段落（"Symptoms:" など）
    Labeled { label: &'static str, text: &'static str },
    Bullets(&'static [&'static str]),
    /// ラベル付きの番号リスト
    Steps(&'static [(&'static str, &'static str)]),
    /// ラベル付きの箇条書き
    Highlights(&'static [(&'static str, &'static str)]),
    /// 画面内リンク（クライアント側で遷移）
    Cta { label: &'static str, path: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoCard {
    pub heading: &'static str,
    pub image: Option<CardImage>,
    pub body: &'static [Block],
}

pub static INFO_CARDS: [InfoCard; 6] = [
    InfoCard {
        heading: "🌱 Understanding Coffee Leaf Nutrition",
        image: Some(CardImage {
            src: "https://www.aboutcoffee.org/wp-content/uploads/2024/10/ripe-coffee-cherries-on-branch-of-coffee-tree-1024x576.jpg",
            alt: "Coffee plantation with green leaves",
            fallback: None,
        }),
        body: &[
            Block::Text("Coffee plants require essential macronutrients for healthy growth and optimal yield. The three primary macronutrients are Nitrogen (N), Phosphorus (P), and Potassium (K), each playing a crucial role in plant development."),
            Block::Heading("Why Leaf Analysis Matters"),
            Block::Text("Leaf analysis helps identify nutrient deficiencies early, allowing farmers to take corrective measures before significant crop damage occurs. Visual symptoms on leaves are often the first indicators of nutrient imbalances."),
        ],
    },
    InfoCard {
        heading: "🍃 Nitrogen (N) Deficiency",
        image: Some(CardImage {
            src: "https://happyhydro.com/cdn/shop/articles/img-1691934190660.jpg?v=1695236089",
            alt: "Coffee leaf with nitrogen deficiency showing yellowing",
            fallback: None,
        }),
        body: &[
            Block::Labeled { label: "Symptoms:", text: "Yellowing of older leaves, stunted growth, reduced leaf size" },
            Block::Labeled { label: "Role:", text: "Essential for chlorophyll production, leaf growth, and protein synthesis" },
            Block::Labeled { label: "Impact:", text: "Reduced photosynthesis, poor vegetative growth, lower yields" },
            Block::Bullets(&[
                "Critical for early growth stages",
                "Affects overall plant vigor",
                "Most commonly deficient in coffee plantations",
            ]),
        ],
    },
    InfoCard {
        heading: "🌿 Phosphorus (P) Deficiency",
        image: Some(CardImage {
            src: "https://di.myupchar.com/2223/phosphorus-deficiency-phosphorus-ki-kami-ke-lakshan-karan-upchar-bachav-ilaj-dawa-in-hindi.webp",
            alt: "Coffee plant roots and soil",
            fallback: None,
        }),
        body: &[
            Block::Labeled { label: "Symptoms:", text: "Dark green or purplish leaves, poor root development, delayed flowering" },
            Block::Labeled { label: "Role:", text: "Energy transfer (ATP), root development, flowering, and fruiting" },
            Block::Labeled { label: "Impact:", text: "Weak root systems, poor fruit set, delayed maturation" },
            Block::Bullets(&[
                "Essential for root establishment",
                "Critical during flowering phase",
                "Important for energy metabolism",
            ]),
        ],
    },
    InfoCard {
        heading: "🌾 Potassium (K) Deficiency",
        image: Some(CardImage {
            src: "https://multisite-assets.icl-growingsolutions.com/wp-content/uploads/sites/12/2024/06/03063204/US_Ag_PotssiumDeficiency_Thumbnail.jpg",
            alt: "Coffee beans and healthy coffee plant",
            fallback: None,
        }),
        body: &[
            Block::Labeled { label: "Symptoms:", text: "Scorched leaf margins, weak stems, poor fruit quality" },
            Block::Labeled { label: "Role:", text: "Water regulation, disease resistance, fruit quality, stress tolerance" },
            Block::Labeled { label: "Impact:", text: "Reduced drought tolerance, increased disease susceptibility, poor bean quality" },
            Block::Bullets(&[
                "Improves stress resistance",
                "Enhances bean quality and flavor",
                "Important for disease resistance",
            ]),
        ],
    },
    InfoCard {
        heading: "🔬 How Our Prediction Works",
        image: Some(CardImage {
            src: "https://images.unsplash.com/photo-1485827404703-89b55fcc595e?w=600&h=400&fit=crop",
            alt: "AI technology analyzing plant data",
            fallback: Some("https://images.pexels.com/photos/1072824/pexels-photo-1072824.jpeg?w=600&h=400&fit=crop"),
        }),
        body: &[
            Block::Text("Our advanced deep learning model uses Convolutional Neural Networks (CNN) to analyze coffee leaf images and detect nutrient deficiencies with high accuracy."),
            Block::Steps(&[
                ("Image Upload:", "Upload a clear image of your coffee leaf"),
                ("AI Analysis:", "Our model analyzes leaf color, texture, and patterns"),
                ("Detection:", "Identifies specific nutrient deficiencies (N, P, K)"),
                ("Recommendations:", "Provides targeted treatment recommendations"),
            ]),
            Block::Cta { label: "Try Prediction Now →", path: "/prediction" },
        ],
    },
    InfoCard {
        heading: "📊 Model Performance",
        image: None,
        body: &[
            Block::Text("Our model has been trained on thousands of coffee leaf images and achieves:"),
            Block::Highlights(&[
                ("High Accuracy:", "92%+ in nutrient deficiency detection"),
                ("Fast Analysis:", "Results in seconds"),
                ("Reliable:", "Consistent performance across different leaf conditions"),
            ]),
        ],
    },
];

/// チームメンバー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
}

pub static TEAM: [TeamMember; 4] = [
    TeamMember {
        name: "Supriya Menta",
        role: "Web Developer",
        image: "Team/supriya.jpg",
        linkedin: "http://linkedin.com/in/supriya-menta-09507a260",
        github: "http://github.com/supriya-menta",
    },
    TeamMember {
        name: "Nikhath",
        role: "ML Engineer",
        image: "Team/nikhath-profile.jpg",
        linkedin: "https://www.linkedin.com/in/mirza-nikhath-fathima-395a3a25b/",
        github: "https://github.com/MirzaNikhathFathima",
    },
    TeamMember {
        name: "Rohitha",
        role: "Full Stack Developer",
        image: "Team/rohitha.jpg",
        linkedin: "https://www.linkedin.com/in/rohitha-konasani-5a08a6278/",
        github: "https://github.com/rohitha2006",
    },
    TeamMember {
        name: "Charan",
        role: "UI/UX Designer",
        image: "Team/charan.jpg",
        linkedin: "http://linkedin.com/in/nallagatla-sricharan",
        github: "https://github.com/nallagatl",
    },
];
