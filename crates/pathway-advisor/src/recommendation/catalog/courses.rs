use super::{
    interest_model, keyword_model, subject_model, CareerPath, TrackId, TrackKind, TrackProfile,
    TrackTraits,
};
use crate::recommendation::domain::InterestCode::{
    Artistic as A, Conventional as C, Enterprising as E, Investigative as I, Realistic as R,
    Social as S,
};
use crate::recommendation::domain::TrackCategory;

struct CourseSeed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: TrackCategory,
    traits: TrackTraits,
    future_relevance: f32,
}

impl CourseSeed {
    fn into_profile(
        self,
        interests: super::InterestModel,
        subjects: super::SubjectModel,
        keywords: super::KeywordModel,
        career_paths: Vec<CareerPath>,
    ) -> TrackProfile {
        TrackProfile {
            id: TrackId::new(self.id),
            kind: TrackKind::Course,
            name: self.name.to_string(),
            category: self.category,
            description: Some(self.description.to_string()),
            interests,
            subjects,
            keywords,
            career_paths,
            future_relevance: Some(self.future_relevance),
            traits: self.traits,
            entrance_exams: Vec::new(),
            best_for: None,
            focus_subjects: Vec::new(),
        }
    }
}

const PLAIN: TrackTraits = TrackTraits {
    technology_oriented: false,
    high_growth: false,
    entrepreneurial: false,
};

pub(super) fn course_profiles() -> Vec<TrackProfile> {
    vec![
        CourseSeed {
            id: "bsc",
            name: "B.Sc (Physics/Chemistry/Biology/Maths)",
            description: "Explore scientific research and analytical thinking",
            category: TrackCategory::Science,
            traits: PLAIN,
            future_relevance: 0.85,
        }
        .into_profile(
            interest_model(&[I, R], &[C], &[(I, 0.4), (R, 0.35), (C, 0.25)]),
            subject_model(
                &[
                    ("physics", 0.3),
                    ("chemistry", 0.25),
                    ("biology", 0.25),
                    ("mathematics", 0.2),
                ],
                &["phy", "chem", "bio", "maths", "math", "science", "zoology", "botany"],
            ),
            keyword_model(
                &["research", "experiment", "scientific", "lab", "hypothesis", "data"],
                &["study", "analysis", "testing"],
            ),
            vec![
                CareerPath::with_salary("Research Scientist", 6.0, 15.0),
                CareerPath::with_salary("Data Analyst", 5.0, 12.0),
            ],
        ),
        CourseSeed {
            id: "bca",
            name: "BCA (Computer Applications)",
            description: "Master software development and IT solutions",
            category: TrackCategory::Science,
            traits: TrackTraits {
                technology_oriented: true,
                high_growth: true,
                entrepreneurial: false,
            },
            future_relevance: 0.98,
        }
        .into_profile(
            interest_model(&[I, R], &[C], &[(I, 0.35), (R, 0.4), (C, 0.25)]),
            subject_model(
                &[
                    ("computer", 0.4),
                    ("mathematics", 0.35),
                    ("physics", 0.15),
                    ("english", 0.1),
                ],
                &["cs", "it", "programming", "maths", "math", "computer science"],
            ),
            keyword_model(
                &[
                    "software", "app", "web", "python", "java", "react", "database", "api", "ai",
                    "ml",
                ],
                &["coding", "programming", "automation"],
            ),
            vec![
                CareerPath::with_salary("Software Developer", 6.0, 25.0),
                CareerPath::with_salary("Data Scientist", 8.0, 30.0),
            ],
        ),
        CourseSeed {
            id: "engineering",
            name: "B.Tech / Engineering",
            description: "Design, build, and innovate with cutting-edge technology",
            category: TrackCategory::Science,
            traits: TrackTraits {
                technology_oriented: true,
                high_growth: true,
                entrepreneurial: false,
            },
            future_relevance: 0.92,
        }
        .into_profile(
            interest_model(&[R, I], &[C], &[(R, 0.4), (I, 0.35), (C, 0.25)]),
            subject_model(
                &[("physics", 0.35), ("mathematics", 0.4), ("chemistry", 0.25)],
                &["phy", "maths", "math", "chem", "science"],
            ),
            keyword_model(
                &["engineering", "design", "prototype", "robot", "circuit", "mechanical"],
                &["build", "construct", "simulation"],
            ),
            vec![
                CareerPath::with_salary("Software Engineer", 8.0, 35.0),
                CareerPath::with_salary("Data Engineer", 10.0, 30.0),
            ],
        ),
        CourseSeed {
            id: "medical",
            name: "MBBS / Medical Sciences",
            description: "Heal and care for patients in healthcare",
            category: TrackCategory::Science,
            traits: PLAIN,
            future_relevance: 0.95,
        }
        .into_profile(
            interest_model(&[I, S], &[R], &[(I, 0.35), (S, 0.4), (R, 0.25)]),
            subject_model(
                &[("biology", 0.45), ("chemistry", 0.35), ("physics", 0.2)],
                &["bio", "chem", "phy", "zoology", "botany", "life science"],
            ),
            keyword_model(
                &["medical", "health", "clinical", "patient", "disease", "treatment"],
                &["biology", "anatomy", "healthcare"],
            ),
            vec![
                CareerPath::with_salary("Doctor/Physician", 10.0, 50.0),
                CareerPath::with_salary("Surgeon", 20.0, 100.0),
            ],
        ),
        CourseSeed {
            id: "bba",
            name: "BBA General",
            description: "Lead businesses and manage organizations",
            category: TrackCategory::Commerce,
            traits: TrackTraits {
                technology_oriented: false,
                high_growth: false,
                entrepreneurial: true,
            },
            future_relevance: 0.82,
        }
        .into_profile(
            interest_model(&[E, C], &[S], &[(E, 0.4), (C, 0.35), (S, 0.25)]),
            subject_model(
                &[
                    ("business", 0.3),
                    ("economics", 0.25),
                    ("accountancy", 0.25),
                    ("english", 0.2),
                ],
                &["commerce", "accounts", "eco", "management"],
            ),
            keyword_model(
                &["business", "startup", "entrepreneur", "marketing", "strategy"],
                &["plan", "analysis", "market", "sales"],
            ),
            vec![
                CareerPath::with_salary("Business Analyst", 6.0, 18.0),
                CareerPath::with_salary("Marketing Manager", 8.0, 25.0),
            ],
        ),
        CourseSeed {
            id: "dm",
            name: "BBA Digital Marketing",
            description: "Drive brand growth through digital strategies",
            category: TrackCategory::Commerce,
            traits: TrackTraits {
                technology_oriented: false,
                high_growth: true,
                entrepreneurial: true,
            },
            future_relevance: 0.94,
        }
        .into_profile(
            interest_model(&[A, E], &[S], &[(A, 0.35), (E, 0.4), (S, 0.25)]),
            subject_model(
                &[
                    ("business", 0.25),
                    ("english", 0.3),
                    ("computer", 0.25),
                    ("economics", 0.2),
                ],
                &["commerce", "marketing", "media", "communication", "it"],
            ),
            keyword_model(
                &[
                    "digital",
                    "marketing",
                    "social media",
                    "seo",
                    "content",
                    "campaign",
                    "brand",
                ],
                &["online", "advertising", "promotion"],
            ),
            vec![
                CareerPath::with_salary("Digital Marketing Manager", 6.0, 20.0),
                CareerPath::with_salary("SEO Specialist", 4.0, 12.0),
            ],
        ),
        CourseSeed {
            id: "finance",
            name: "BBA Finance / Banking",
            description: "Manage investments and financial planning",
            category: TrackCategory::Commerce,
            traits: PLAIN,
            future_relevance: 0.88,
        }
        .into_profile(
            interest_model(&[C, I], &[E], &[(C, 0.4), (I, 0.35), (E, 0.25)]),
            subject_model(
                &[
                    ("accountancy", 0.35),
                    ("economics", 0.3),
                    ("mathematics", 0.25),
                    ("business", 0.1),
                ],
                &["accounts", "eco", "maths", "math", "finance", "commerce"],
            ),
            keyword_model(
                &["finance", "investment", "stock", "banking", "accounting", "portfolio"],
                &["financial", "capital", "audit", "tax"],
            ),
            vec![
                CareerPath::with_salary("Financial Analyst", 6.0, 20.0),
                CareerPath::with_salary("Investment Banker", 12.0, 50.0),
            ],
        ),
        CourseSeed {
            id: "bcom",
            name: "B.Com (Commerce)",
            description: "Excel in accounting, taxation, and commerce",
            category: TrackCategory::Commerce,
            traits: PLAIN,
            future_relevance: 0.78,
        }
        .into_profile(
            interest_model(&[C, E], &[I], &[(C, 0.45), (E, 0.3), (I, 0.25)]),
            subject_model(
                &[
                    ("accountancy", 0.4),
                    ("economics", 0.25),
                    ("business", 0.2),
                    ("mathematics", 0.15),
                ],
                &["accounts", "eco", "commerce", "maths", "math"],
            ),
            keyword_model(
                &["accounting", "tax", "audit", "financial", "gst", "tally"],
                &["commerce", "business", "accounts"],
            ),
            vec![
                CareerPath::with_salary("Chartered Accountant", 8.0, 30.0),
                CareerPath::with_salary("Tax Consultant", 5.0, 15.0),
            ],
        ),
        CourseSeed {
            id: "ba",
            name: "BA (English/History/Political Science)",
            description: "Explore humanities, writing, and social sciences",
            category: TrackCategory::Arts,
            traits: PLAIN,
            future_relevance: 0.72,
        }
        .into_profile(
            interest_model(&[A, S], &[I], &[(A, 0.4), (S, 0.35), (I, 0.25)]),
            subject_model(
                &[
                    ("english", 0.3),
                    ("history", 0.25),
                    ("political", 0.25),
                    ("sociology", 0.2),
                ],
                &[
                    "eng",
                    "hist",
                    "civics",
                    "pol sci",
                    "literature",
                    "geography",
                    "psychology",
                ],
            ),
            keyword_model(
                &["writing", "research", "essay", "journalism", "content", "blog"],
                &["social", "cultural", "historical", "political"],
            ),
            vec![
                CareerPath::with_salary("Content Writer", 3.0, 12.0),
                CareerPath::with_salary("Civil Services", 8.0, 25.0),
            ],
        ),
        CourseSeed {
            id: "law",
            name: "LLB / Law",
            description: "Advocate for justice and legal expertise",
            category: TrackCategory::Arts,
            traits: PLAIN,
            future_relevance: 0.80,
        }
        .into_profile(
            interest_model(&[E, I], &[S], &[(E, 0.4), (I, 0.35), (S, 0.25)]),
            subject_model(
                &[
                    ("english", 0.3),
                    ("political", 0.3),
                    ("history", 0.2),
                    ("economics", 0.2),
                ],
                &["eng", "civics", "pol sci", "hist", "eco"],
            ),
            keyword_model(
                &["legal", "law", "rights", "constitution", "court", "case study"],
                &["justice", "policy", "governance"],
            ),
            vec![
                CareerPath::with_salary("Lawyer/Advocate", 5.0, 50.0),
                CareerPath::with_salary("Corporate Counsel", 12.0, 40.0),
            ],
        ),
    ]
}
