use serde::{Serialize, Serializer};
use std::fmt::Display;

/// Number of questions in the interest quiz, one per feature
pub const FEATURE_COUNT: usize = 25;

/// Broad interest area grouping several quiz features
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    CreativeArtistic,
    LogicalScientific,
    TechnicalMechanical,
    MedicalBiological,
    SocialSciencesHumanities,
    LanguagesLiterature,
    BusinessCommunication,
    HobbiesWellbeing,
}

impl Category {
    /// All categories in the order they first appear in the quiz
    pub const ALL: [Category; 8] = [
        Category::CreativeArtistic,
        Category::LogicalScientific,
        Category::TechnicalMechanical,
        Category::MedicalBiological,
        Category::SocialSciencesHumanities,
        Category::LanguagesLiterature,
        Category::BusinessCommunication,
        Category::HobbiesWellbeing,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::CreativeArtistic => "Creative & Artistic",
            Category::LogicalScientific => "Logical & Scientific",
            Category::TechnicalMechanical => "Technical & Mechanical",
            Category::MedicalBiological => "Medical & Biological",
            Category::SocialSciencesHumanities => "Social Sciences & Humanities",
            Category::LanguagesLiterature => "Languages & Literature",
            Category::BusinessCommunication => "Business & Communication",
            Category::HobbiesWellbeing => "Hobbies & Well-being",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// One quiz question and the interest feature it measures
///
/// `id` is the position of the answer in the submitted rating sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureDefinition {
    pub id: usize,
    pub name: &'static str,
    pub category: Category,
    pub prompt: &'static str,
}

const fn feature(
    id: usize,
    name: &'static str,
    category: Category,
    prompt: &'static str,
) -> FeatureDefinition {
    FeatureDefinition {
        id,
        name,
        category,
        prompt,
    }
}

// Labels are matched verbatim against the course catalog; keep spelling as-is.
#[rustfmt::skip]
static FEATURES: [FeatureDefinition; FEATURE_COUNT] = [
    feature(0, "Drawing", Category::CreativeArtistic, "Do you enjoy drawing or sketching in your free time?"),
    feature(1, "Dancing", Category::CreativeArtistic, "Do you love dancing as a form of expression?"),
    feature(2, "Singing", Category::CreativeArtistic, "Do you participate in singing or enjoy vocal music?"),
    feature(3, "Photography", Category::CreativeArtistic, "Are you passionate about photography and capturing moments?"),
    feature(4, "Makeup", Category::CreativeArtistic, "Do you enjoy makeup and fashion styling?"),
    feature(5, "Designing", Category::CreativeArtistic, "Do you like designing clothes, graphics, or posters?"),
    feature(6, "Solving Puzzles", Category::LogicalScientific, "Are you interested in solving puzzles or brain games?"),
    feature(7, "Coding", Category::LogicalScientific, "Do you enjoy coding or programming challenges?"),
    feature(8, "Electricity Components", Category::LogicalScientific, "Are you curious about how electrical components work?"),
    feature(9, "Science, Chemistry, Physics", Category::LogicalScientific, "Do you enjoy learning about scientific concepts?"),
    feature(10, "Mechanic Parts", Category::TechnicalMechanical, "Do you love understanding or repairing mechanical parts?"),
    feature(11, "Computer Parts", Category::TechnicalMechanical, "Are you curious about how computers are built?"),
    feature(12, "Engineering", Category::TechnicalMechanical, "Are you interested in engineering concepts and tools?"),
    feature(13, "Doctor", Category::MedicalBiological, "Do you want to help people as a doctor in the future?"),
    feature(14, "Pharmisist", Category::MedicalBiological, "Are you interested in medicines or pharmacy?"),
    feature(15, "Biology, Zoology, Botany", Category::MedicalBiological, "Do you like learning about biology, animals, or plants?"),
    feature(16, "History", Category::SocialSciencesHumanities, "Are you fascinated by history or historical events?"),
    feature(17, "Psychology", Category::SocialSciencesHumanities, "Do you enjoy learning about how people behave or think?"),
    feature(18, "Sociology", Category::SocialSciencesHumanities, "Are you interested in social studies or society?"),
    feature(19, "Literature, Reading", Category::LanguagesLiterature, "Do you love reading books or literature?"),
    feature(20, "Hindi, French, English, Urdu, Other Language", Category::LanguagesLiterature, "Are you fluent or interested in learning new languages?"),
    feature(21, "Business, Business Education", Category::BusinessCommunication, "Do you see yourself starting or managing a business?"),
    feature(22, "Debating", Category::BusinessCommunication, "Do you enjoy public speaking or debating?"),
    feature(23, "Journalism", Category::BusinessCommunication, "Are you curious about how news and media work?"),
    feature(24, "Yoga, Gymnastics, Exercise", Category::HobbiesWellbeing, "Do you practice yoga, gymnastics, or regular exercise?"),
];

/// The ordered feature list; index `i` scores answer `i`
pub fn features() -> &'static [FeatureDefinition] {
    &FEATURES
}

/// Checks the positional coupling between ids and rating positions
///
/// Returns a description of the first violation found.
pub fn verify_taxonomy() -> Result<(), String> {
    for (position, definition) in features().iter().enumerate() {
        if definition.id != position {
            return Err(format!(
                "feature '{}' declares id {} but sits at position {}",
                definition.name, definition.id, position
            ));
        }
    }

    for category in Category::ALL {
        if !features().iter().any(|f| f.category == category) {
            return Err(format!("category '{}' has no features", category));
        }
    }

    Ok(())
}
