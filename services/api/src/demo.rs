use crate::infra::{build_service, load_profile, parse_date, parse_kind, InMemoryProfileStore};
use chrono::{Local, NaiveDate};
use clap::Args;
use pathway_advisor::config::{AppConfig, CatalogConfig};
use pathway_advisor::error::AppError;
use pathway_advisor::recommendation::report::CourseRecommendation;
use pathway_advisor::recommendation::signals::DataUsed;
use pathway_advisor::recommendation::{
    AptitudeScores, AssessmentResults, ExperienceRecord, InterestCode, InterestVector,
    KnowledgeScore, ProjectRecord, StreamRecommendation, StudentProfile, SubjectMark,
    TrackCatalog, TrackKind,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct CourseArgs {
    /// Student profile document (JSON)
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// CSV export of subject marks; replaces the marks in the profile
    #[arg(long)]
    pub(crate) marks_csv: Option<PathBuf>,
    /// Restrict to one category (science, commerce, arts)
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// Number of courses to print
    #[arg(long, default_value_t = 5)]
    pub(crate) top: usize,
    /// Evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the full JSON payload instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct StreamArgs {
    /// Student profile document (JSON)
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// CSV export of subject marks; replaces the marks in the profile
    #[arg(long)]
    pub(crate) marks_csv: Option<PathBuf>,
    /// Evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the full JSON payload instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CatalogArgs {
    /// `courses` or `streams`
    #[arg(value_parser = parse_kind)]
    pub(crate) kind: TrackKind,
    /// Print the catalog as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Number of courses to print per student
    #[arg(long, default_value_t = 3)]
    pub(crate) top: usize,
}

pub(crate) fn run_course_recommendation(args: CourseArgs) -> Result<(), AppError> {
    let CourseArgs {
        profile,
        marks_csv,
        category,
        top,
        today,
        json,
    } = args;

    let config = AppConfig::load()?;
    let service = build_service(InMemoryProfileStore::default(), &config.catalog)?;
    let profile = load_profile(&profile, marks_csv.as_deref())?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let report = service.recommend_courses(&profile, category.as_deref(), today)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_courses(&report, top);
    }
    Ok(())
}

pub(crate) fn run_stream_recommendation(args: StreamArgs) -> Result<(), AppError> {
    let StreamArgs {
        profile,
        marks_csv,
        today,
        json,
    } = args;

    let config = AppConfig::load()?;
    let service = build_service(InMemoryProfileStore::default(), &config.catalog)?;
    let profile = load_profile(&profile, marks_csv.as_deref())?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let report = service.recommend_streams(&profile, today)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_stream(&report);
    }
    Ok(())
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let path = match args.kind {
        TrackKind::Course => config.catalog.courses_path.as_deref(),
        TrackKind::Stream => config.catalog.streams_path.as_deref(),
    };
    let catalog = TrackCatalog::load(args.kind, path)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(catalog.tracks())?);
        return Ok(());
    }

    println!("{} catalog ({} tracks)", args.kind.label(), catalog.len());
    for track in catalog.iter() {
        let careers = track.career_roles();
        println!(
            "- {} [{}] {} | careers: {}",
            track.id,
            track.category,
            track.name,
            careers.join(", ")
        );
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { today, top } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let service = build_service(InMemoryProfileStore::default(), &CatalogConfig::default())?;

    println!("Pathway advisor demo ({today})");
    for (label, profile) in demo_students() {
        println!("\n== {label}");
        let courses = service.recommend_courses(&profile, None, today)?;
        render_courses(&courses, top);

        let streams = service.recommend_streams(&profile, today)?;
        render_stream(&streams);
    }
    Ok(())
}

fn render_courses(report: &CourseRecommendation, top: usize) {
    println!("Course recommendations ({})", report.evaluated_on);
    println!("  Data used: {}", data_used_summary(&report.data_used));
    if report.recommendations.is_empty() {
        println!("  No recommendation: the profile has no interest scores or nothing matched the filter");
        return;
    }

    for (rank, entry) in report.recommendations.iter().take(top).enumerate() {
        let breakdown = &entry.score_breakdown;
        println!(
            "  {}. {} - {} ({})",
            rank + 1,
            entry.track.name,
            entry.score,
            entry.band
        );
        println!(
            "     interest {} | academic {} | projects {} | experience {} | synergy {} | forward {}",
            breakdown.interest,
            breakdown.academic,
            breakdown.projects,
            breakdown.experience,
            breakdown.synergy,
            breakdown.forward
        );
        for reason in &entry.reasons {
            println!("     - {reason}");
        }
    }
}

fn render_stream(report: &StreamRecommendation) {
    let Some(stream) = report.recommended_stream.as_deref() else {
        println!("Stream recommendation: none (no interest scores on file)");
        return;
    };

    let fit = report
        .stream_fit
        .map(|band| band.label())
        .unwrap_or_default();
    println!(
        "Stream recommendation: {stream} ({fit}, confidence {})",
        report.confidence
    );
    println!("  Interests: {}", report.reasoning.interests);
    println!("  Aptitude: {}", report.reasoning.aptitude);
    println!("  Activities: {}", report.reasoning.activities);
    if let (Some(alternative), Some(reason)) = (
        report.alternative_stream.as_deref(),
        report.alternative_reason.as_deref(),
    ) {
        println!("  Alternative: {alternative} ({reason})");
    }
    if !report.subjects_to_focus.is_empty() {
        println!("  Focus on: {}", report.subjects_to_focus.join(", "));
    }
    if !report.entrance_exams.is_empty() {
        println!("  Entrance exams: {}", report.entrance_exams.join(", "));
    }
    if !report.college_types.is_empty() {
        println!("  Colleges: {}", report.college_types.join(", "));
    }
}

fn data_used_summary(data: &DataUsed) -> String {
    let flags = [
        ("interests", data.has_interests),
        ("academics", data.has_academic_data),
        ("projects", data.has_projects),
        ("experience", data.has_experiences),
    ];
    let used: Vec<&str> = flags
        .iter()
        .filter(|(_, present)| *present)
        .map(|(name, _)| *name)
        .collect();
    if used.is_empty() {
        "none".to_string()
    } else {
        used.join(", ")
    }
}

fn demo_students() -> Vec<(&'static str, StudentProfile)> {
    let coder = StudentProfile {
        interests: InterestVector::from_pairs([
            (InterestCode::Realistic, 19.0),
            (InterestCode::Investigative, 23.0),
            (InterestCode::Artistic, 7.0),
            (InterestCode::Social, 5.0),
            (InterestCode::Enterprising, 10.0),
            (InterestCode::Conventional, 12.0),
        ]),
        subject_marks: vec![
            SubjectMark::with_percentage("Mathematics", 93.0),
            SubjectMark::with_percentage("Physics", 84.0),
            SubjectMark::with_percentage("Computer Science", 96.0),
            SubjectMark::with_percentage("English", 72.0),
        ],
        projects: vec![
            ProjectRecord {
                title: "Canteen ordering app".to_string(),
                description: Some("React front end and a python api on a sql database".to_string()),
                tech_stack: Some(vec!["React".to_string(), "Python".to_string()]),
            },
            ProjectRecord {
                title: "Crop disease classifier".to_string(),
                description: Some("Machine learning model trained on leaf photos".to_string()),
                tech_stack: None,
            },
        ],
        experiences: vec![ExperienceRecord {
            organization: "CodeCraft Labs".to_string(),
            role: "Software development intern".to_string(),
            description: Some("Fixed bugs in the billing service".to_string()),
            verified: Some(true),
            duration: Some("2 months".to_string()),
        }],
        assessment: None,
    };

    let founder = StudentProfile {
        interests: InterestVector::from_pairs([
            (InterestCode::Enterprising, 25.0),
            (InterestCode::Conventional, 17.0),
            (InterestCode::Social, 14.0),
            (InterestCode::Artistic, 9.0),
        ]),
        subject_marks: vec![
            SubjectMark::with_percentage("Accountancy", 86.0),
            SubjectMark::with_percentage("Business Studies", 91.0),
            SubjectMark::with_marks("Economics", 71.0, 80.0),
        ],
        projects: vec![ProjectRecord {
            title: "Thrift store pop-up".to_string(),
            description: Some("Ran a startup stall with a marketing plan and budget".to_string()),
            tech_stack: None,
        }],
        experiences: vec![ExperienceRecord {
            organization: "Student council".to_string(),
            role: "Treasurer".to_string(),
            description: Some("Led the finance team for the annual fest".to_string()),
            verified: None,
            duration: Some("1 year".to_string()),
        }],
        assessment: None,
    };

    let writer = StudentProfile {
        interests: InterestVector::from_pairs([
            (InterestCode::Artistic, 27.0),
            (InterestCode::Social, 21.0),
            (InterestCode::Investigative, 11.0),
        ]),
        subject_marks: vec![
            SubjectMark::with_percentage("English", 94.0),
            SubjectMark::with_percentage("History", 87.0),
            SubjectMark::with_percentage("Political Science", 82.0),
        ],
        ..StudentProfile::default()
    };

    let newcomer = StudentProfile {
        assessment: Some(AssessmentResults {
            riasec: InterestVector::from_pairs([
                (InterestCode::Social, 20.0),
                (InterestCode::Investigative, 17.0),
                (InterestCode::Conventional, 8.0),
            ]),
            aptitude: Some(AptitudeScores {
                numerical: Some(64.0),
                verbal: Some(81.0),
                logical: Some(77.0),
                spatial: Some(58.0),
                overall: Some(70.0),
            }),
            knowledge: Some(KnowledgeScore {
                score: Some(68.0),
                dominant_area: None,
            }),
        }),
        ..StudentProfile::default()
    };

    vec![
        ("Science student who codes", coder),
        ("Commerce student running a side business", founder),
        ("Humanities student with no projects yet", writer),
        ("New student with only assessment results", newcomer),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_students_all_receive_recommendations() {
        let service = build_service(InMemoryProfileStore::default(), &CatalogConfig::default())
            .expect("builtin service");
        let today = NaiveDate::from_ymd_opt(2025, 4, 1).expect("valid date");

        for (label, profile) in demo_students() {
            profile.validate().expect("demo profile is valid");
            let courses = service
                .recommend_courses(&profile, None, today)
                .expect("courses");
            assert!(!courses.recommendations.is_empty(), "{label}");
            let streams = service.recommend_streams(&profile, today).expect("streams");
            assert!(streams.recommended_stream.is_some(), "{label}");
        }
    }

    #[test]
    fn data_used_summary_lists_present_sections() {
        let data = DataUsed {
            has_interests: true,
            has_academic_data: false,
            has_projects: true,
            has_experiences: false,
        };
        assert_eq!(data_used_summary(&data), "interests, projects");
        assert_eq!(data_used_summary(&DataUsed::default()), "none");
    }
}
