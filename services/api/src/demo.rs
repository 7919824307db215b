use crate::infra::InMemoryQuoteRepository;
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

use heatquote::error::AppError;
use heatquote::quotes::{
    CatalogueImporter, PropertyProfile, QuoteRepository, QuoteService, RecommendationEngine,
    RecommendationResult, ScenarioScore,
};

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Number of bedrooms
    #[arg(long)]
    pub(crate) bedrooms: u8,
    /// Number of bathrooms
    #[arg(long)]
    pub(crate) bathrooms: u8,
    /// Number of occupants
    #[arg(long)]
    pub(crate) occupants: u8,
    /// Current heating system description
    #[arg(long, default_value = "existing")]
    pub(crate) current_system: String,
    /// Score against a scenario CSV export instead of the built-in catalogue
    #[arg(long)]
    pub(crate) catalogue_csv: Option<PathBuf>,
    /// Print the per-scenario score table
    #[arg(long)]
    pub(crate) show_scores: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Quote request date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) requested_on: Option<NaiveDate>,
    /// Score against a scenario CSV export instead of the built-in catalogue
    #[arg(long)]
    pub(crate) catalogue_csv: Option<PathBuf>,
    /// Print the per-scenario score table for each demo profile
    #[arg(long)]
    pub(crate) show_scores: bool,
}

pub(crate) fn run_recommendation(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        bedrooms,
        bathrooms,
        occupants,
        current_system,
        catalogue_csv,
        show_scores,
    } = args;

    let (engine, imported) = load_engine_from_path(catalogue_csv)?;
    let profile = PropertyProfile {
        bedrooms,
        bathrooms,
        occupants,
        current_system,
    };

    let recommendation = engine.recommend(&profile);
    render_recommendation(&profile, &recommendation, imported);

    if show_scores {
        render_score_table(&engine.rank(&profile));
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        requested_on,
        catalogue_csv,
        show_scores,
    } = args;

    let requested_on = requested_on.unwrap_or_else(|| Local::now().date_naive());

    println!("Boiler quote demo");
    let (engine, imported) = load_engine_from_path(catalogue_csv)?;
    if imported {
        println!("Catalogue source: CSV export");
    } else {
        println!("Catalogue source: built-in scenario table");
    }

    let engine = Arc::new(engine);
    let repository = Arc::new(InMemoryQuoteRepository::default());
    let service = Arc::new(QuoteService::new(repository.clone(), engine.clone()));

    for (label, profile) in demo_profiles() {
        println!("\n{label}");
        let record = match service.quote(profile.clone(), requested_on) {
            Ok(record) => record,
            Err(err) => {
                println!("  Quote failed: {err}");
                continue;
            }
        };

        let view = record.status_view();
        println!(
            "- Quote {} -> {} boiler, {} kW",
            view.quote_id.0, view.recommended_system, view.boiler_size
        );
        if let Some(cylinder) = view.cylinder_size {
            println!("  Cylinder: {cylinder}L");
        }
        println!("  Reasoning: {}", view.reasoning);
        if let Some(scenario) = &record.recommendation.matched_scenario {
            println!(
                "  Matched scenario {}: {}",
                scenario.id, scenario.property_description
            );
            println!("  Specification: {}", scenario.recommended_specification);
        }

        if show_scores {
            render_score_table(&engine.rank(&profile));
        }
    }

    match repository.recent(1) {
        Ok(records) => {
            if let Some(record) = records.first() {
                match serde_json::to_string_pretty(&record.status_view()) {
                    Ok(json) => println!("\nLatest stored quote payload:\n{}", json),
                    Err(err) => println!("\nLatest quote payload unavailable: {}", err),
                }
            }
        }
        Err(err) => println!("\nRepository unavailable: {}", err),
    }

    Ok(())
}

fn demo_profiles() -> Vec<(&'static str, PropertyProfile)> {
    vec![
        (
            "Three-bed semi, single bathroom, family of four",
            PropertyProfile {
                bedrooms: 3,
                bathrooms: 1,
                occupants: 4,
                current_system: "ageing system boiler".to_string(),
            },
        ),
        (
            "Four-bed detached, two bathrooms, five occupants",
            PropertyProfile {
                bedrooms: 4,
                bathrooms: 2,
                occupants: 5,
                current_system: "regular boiler".to_string(),
            },
        ),
        (
            "One-bed flat, couple, no gas heating yet",
            PropertyProfile {
                bedrooms: 1,
                bathrooms: 1,
                occupants: 2,
                current_system: "electric only".to_string(),
            },
        ),
    ]
}

fn render_recommendation(
    profile: &PropertyProfile,
    recommendation: &RecommendationResult,
    imported: bool,
) {
    println!(
        "Profile: {} bed / {} bath / {} occupants (current system: {})",
        profile.bedrooms, profile.bathrooms, profile.occupants, profile.current_system
    );
    if imported {
        println!("Catalogue source: CSV export");
    } else {
        println!("Catalogue source: built-in scenario table");
    }

    println!(
        "Recommendation: {} boiler, {} kW",
        recommendation.recommended_system.label(),
        recommendation.boiler_size
    );
    if let Some(cylinder) = recommendation.cylinder_size {
        println!("Cylinder: {cylinder}L");
    }
    println!("Reasoning: {}", recommendation.reasoning);

    match &recommendation.matched_scenario {
        Some(scenario) => {
            println!(
                "Matched scenario {}: {}",
                scenario.id, scenario.property_description
            );
            println!("Specification: {}", scenario.recommended_specification);
        }
        None => println!("Matched scenario: none (threshold rules applied)"),
    }
}

fn render_score_table(scores: &[ScenarioScore]) {
    println!("  Scenario scores (top 5)");
    for score in scores.iter().take(5) {
        println!(
            "    - {}: total {:.1} (bedrooms {:.1}, bathrooms {:.1}, occupants {:.1}, affinity {:.1})",
            score.scenario_id,
            score.total,
            score.bedroom_points,
            score.bathroom_points,
            score.occupant_points,
            score.affinity_points
        );
    }
}

pub(crate) fn load_engine_from_path(
    catalogue_csv: Option<PathBuf>,
) -> Result<(RecommendationEngine, bool), AppError> {
    match catalogue_csv {
        Some(path) => CatalogueImporter::from_path(path)
            .map(|catalogue| (RecommendationEngine::new(catalogue), true))
            .map_err(AppError::from),
        None => Ok((RecommendationEngine::standard(), false)),
    }
}
