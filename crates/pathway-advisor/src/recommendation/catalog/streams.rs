use super::{
    interest_model, keyword_model, strings, subject_model, CareerPath, InterestModel,
    KeywordModel, SubjectModel, TrackId, TrackKind, TrackProfile, TrackTraits,
};
use crate::recommendation::domain::InterestCode::{
    Artistic as A, Conventional as C, Enterprising as E, Investigative as I, Realistic as R,
    Social as S,
};
use crate::recommendation::domain::TrackCategory;

#[allow(clippy::too_many_arguments)]
fn stream(
    id: &str,
    name: &str,
    category: TrackCategory,
    interests: InterestModel,
    subjects: SubjectModel,
    keywords: KeywordModel,
    careers: &[&str],
    entrance_exams: &[&str],
    best_for: &str,
    focus_subjects: &[&str],
) -> TrackProfile {
    TrackProfile {
        id: TrackId::new(id),
        kind: TrackKind::Stream,
        name: name.to_string(),
        category,
        description: None,
        interests,
        subjects,
        keywords,
        career_paths: careers.iter().map(|role| CareerPath::new(*role)).collect(),
        future_relevance: None,
        traits: TrackTraits::default(),
        entrance_exams: strings(entrance_exams),
        best_for: Some(best_for.to_string()),
        focus_subjects: strings(focus_subjects),
    }
}

pub(super) fn stream_profiles() -> Vec<TrackProfile> {
    let mut pcms = stream(
        "pcms",
        "PCMS (Physics, Chemistry, Maths, Computer Science)",
        TrackCategory::Science,
        interest_model(&[I, R], &[C], &[(I, 0.35), (R, 0.4), (C, 0.25)]),
        subject_model(
            &[
                ("physics", 0.3),
                ("chemistry", 0.2),
                ("mathematics", 0.3),
                ("computer", 0.2),
            ],
            &["phy", "chem", "maths", "math", "cs", "it", "programming", "computer science"],
        ),
        keyword_model(
            &["software", "coding", "programming", "app", "web", "technology", "ai", "data"],
            &["computer", "tech", "digital"],
        ),
        &[
            "Software Engineer",
            "Data Scientist",
            "AI/ML Engineer",
            "Cybersecurity Expert",
            "Game Developer",
        ],
        &["JEE Main", "JEE Advanced", "BITSAT", "State Engineering Exams"],
        "Students interested in technology, programming, and computer science",
        &["Physics", "Chemistry", "Mathematics", "Computer Science"],
    );
    pcms.traits.technology_oriented = true;

    let mut commerce = stream(
        "commerce",
        "Commerce without Maths",
        TrackCategory::Commerce,
        interest_model(&[E, C], &[S], &[(E, 0.4), (C, 0.35), (S, 0.25)]),
        subject_model(
            &[("accountancy", 0.35), ("economics", 0.3), ("business", 0.35)],
            &["accounts", "eco", "commerce", "business studies"],
        ),
        keyword_model(
            &["business", "entrepreneur", "marketing", "sales", "management"],
            &["trade", "company", "startup"],
        ),
        &[
            "Business Manager",
            "Marketing Executive",
            "HR Manager",
            "Entrepreneur",
            "Company Secretary",
        ],
        &["CUET", "IPM", "BBA Entrance Exams"],
        "Students interested in business, management, and entrepreneurship",
        &["Accountancy", "Economics", "Business Studies"],
    );
    commerce.traits.entrepreneurial = true;

    vec![
        stream(
            "pcmb",
            "PCMB (Physics, Chemistry, Maths, Biology)",
            TrackCategory::Science,
            interest_model(&[I, R], &[C], &[(I, 0.4), (R, 0.35), (C, 0.25)]),
            subject_model(
                &[
                    ("physics", 0.25),
                    ("chemistry", 0.25),
                    ("mathematics", 0.25),
                    ("biology", 0.25),
                ],
                &["phy", "chem", "bio", "maths", "math", "science", "zoology", "botany"],
            ),
            keyword_model(
                &["research", "medical", "doctor", "scientist", "lab", "experiment"],
                &["biology", "healthcare", "medicine"],
            ),
            &[
                "Doctor/MBBS",
                "Research Scientist",
                "Biotechnologist",
                "Pharmacist",
                "Veterinarian",
            ],
            &["NEET", "AIIMS", "JIPMER", "State Medical Exams"],
            "Students interested in medicine, biology, and life sciences",
            &["Physics", "Chemistry", "Mathematics", "Biology"],
        ),
        pcms,
        stream(
            "pcm",
            "PCM (Physics, Chemistry, Maths)",
            TrackCategory::Science,
            interest_model(&[R, I], &[C], &[(R, 0.4), (I, 0.35), (C, 0.25)]),
            subject_model(
                &[("physics", 0.35), ("chemistry", 0.25), ("mathematics", 0.4)],
                &["phy", "chem", "maths", "math", "science"],
            ),
            keyword_model(
                &["engineering", "design", "mechanical", "electrical", "civil", "robot"],
                &["build", "construct", "machine"],
            ),
            &[
                "Engineer (Mechanical/Civil/Electrical)",
                "Architect",
                "Pilot",
                "Defense Services",
                "Physicist",
            ],
            &["JEE Main", "JEE Advanced", "NDA", "State Engineering Exams"],
            "Students interested in engineering, physics, and mathematics",
            &["Physics", "Chemistry", "Mathematics"],
        ),
        stream(
            "pcb",
            "PCB (Physics, Chemistry, Biology)",
            TrackCategory::Science,
            interest_model(&[I, S], &[R], &[(I, 0.35), (S, 0.4), (R, 0.25)]),
            subject_model(
                &[("physics", 0.25), ("chemistry", 0.35), ("biology", 0.4)],
                &["phy", "chem", "bio", "zoology", "botany", "life science"],
            ),
            keyword_model(
                &["medical", "nursing", "healthcare", "patient", "clinical"],
                &["biology", "health", "care"],
            ),
            &[
                "Doctor/MBBS",
                "Nurse",
                "Physiotherapist",
                "Medical Lab Technician",
                "Dentist",
            ],
            &["NEET", "AIIMS", "Nursing Entrance Exams"],
            "Students interested in healthcare and medical sciences",
            &["Physics", "Chemistry", "Biology"],
        ),
        stream(
            "commerce_maths",
            "Commerce with Maths",
            TrackCategory::Commerce,
            interest_model(&[E, C], &[I], &[(E, 0.35), (C, 0.4), (I, 0.25)]),
            subject_model(
                &[
                    ("accountancy", 0.3),
                    ("economics", 0.25),
                    ("business", 0.2),
                    ("mathematics", 0.25),
                ],
                &["accounts", "eco", "commerce", "maths", "math", "business studies"],
            ),
            keyword_model(
                &["finance", "investment", "stock", "banking", "ca", "accounting"],
                &["business", "money", "trade"],
            ),
            &[
                "Chartered Accountant",
                "Investment Banker",
                "Financial Analyst",
                "Actuary",
                "Economist",
            ],
            &["CA Foundation", "CS Foundation", "CMA", "CUET"],
            "Students interested in finance, accounting, and quantitative analysis",
            &["Accountancy", "Economics", "Business Studies", "Mathematics"],
        ),
        commerce,
        stream(
            "arts_psychology",
            "Arts with Psychology",
            TrackCategory::Arts,
            interest_model(&[S, I], &[A], &[(S, 0.4), (I, 0.35), (A, 0.25)]),
            subject_model(
                &[
                    ("english", 0.25),
                    ("psychology", 0.35),
                    ("sociology", 0.2),
                    ("history", 0.2),
                ],
                &["eng", "psych", "socio", "hist", "humanities"],
            ),
            keyword_model(
                &["psychology", "counseling", "mental health", "behavior", "therapy"],
                &["human", "mind", "social"],
            ),
            &[
                "Psychologist",
                "Counselor",
                "HR Professional",
                "Social Worker",
                "Clinical Therapist",
            ],
            &["CUET", "DU JAT", "Psychology Entrance Exams"],
            "Students interested in understanding human behavior and mental health",
            &["English", "Psychology", "Sociology", "History"],
        ),
        stream(
            "arts_economics",
            "Arts with Economics",
            TrackCategory::Arts,
            interest_model(&[I, E], &[S], &[(I, 0.4), (E, 0.35), (S, 0.25)]),
            subject_model(
                &[
                    ("economics", 0.35),
                    ("english", 0.25),
                    ("political", 0.2),
                    ("history", 0.2),
                ],
                &["eco", "eng", "civics", "pol sci", "hist"],
            ),
            keyword_model(
                &["economics", "policy", "government", "civil services", "ias"],
                &["society", "politics", "development"],
            ),
            &[
                "Economist",
                "Civil Services (IAS/IPS)",
                "Policy Analyst",
                "Journalist",
                "Professor",
            ],
            &["UPSC", "CUET", "Economics Honors Entrance"],
            "Students interested in economics, policy-making, and civil services",
            &["Economics", "English", "Political Science", "History"],
        ),
        stream(
            "arts",
            "Arts/Humanities General",
            TrackCategory::Arts,
            interest_model(&[A, S], &[I], &[(A, 0.4), (S, 0.35), (I, 0.25)]),
            subject_model(
                &[
                    ("english", 0.3),
                    ("history", 0.25),
                    ("political", 0.2),
                    ("geography", 0.25),
                ],
                &["eng", "hist", "civics", "geo", "literature", "hindi"],
            ),
            keyword_model(
                &["writing", "journalism", "content", "creative", "media", "law"],
                &["art", "culture", "literature"],
            ),
            &[
                "Journalist",
                "Content Writer",
                "Lawyer",
                "Teacher",
                "Civil Services",
            ],
            &["CLAT", "CUET", "Mass Communication Entrance"],
            "Students interested in humanities, writing, and creative fields",
            &["English", "History", "Political Science", "Geography"],
        ),
    ]
}
