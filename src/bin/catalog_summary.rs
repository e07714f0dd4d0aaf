//! Print a summary of the content catalog
//!
//! Section headers come from the persisted language preference, so this
//! doubles as a smoke test for the settings store.

use anyhow::Context;
use clap::Parser;
use paisaguru::content::{self, ContentCatalog};
use paisaguru::currency::format_inr;
use paisaguru::settings::{Language, SettingsStore};

#[derive(Parser, Debug)]
#[command(name = "catalog_summary", about = "Content catalog report")]
struct Args {
    /// Catalog JSON file; omit to use the built-in content
    #[arg(long)]
    catalog: Option<String>,

    /// Settings file holding the language preference
    #[arg(long, default_value = "settings.json")]
    settings: String,

    /// Switch the persisted language before printing (en, hi, pa)
    #[arg(long)]
    lang: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let catalog = match &args.catalog {
        Some(path) => content::load_catalog(path)
            .map_err(|err| anyhow::anyhow!("{err}"))
            .with_context(|| format!("unable to load catalog from {path}"))?,
        None => ContentCatalog::builtin(),
    };

    let mut store = SettingsStore::open(&args.settings);
    if let Some(code) = &args.lang {
        let language = Language::from_code(code)
            .with_context(|| format!("unknown language code {code}"))?;
        store
            .set_language(language)
            .map_err(|err| anyhow::anyhow!("{err}"))
            .context("unable to persist language preference")?;
        println!("Language changed to {}\n", language.display_name());
    }
    let t = store.translations();

    println!("{}", t.welcome);
    println!("{} | {} | {} | {} | {}\n", t.home, t.learn, t.protect, t.calculate, t.profile);

    println!("{} ({} pts, {}-day streak)", catalog.profile.name, catalog.profile.total_points, catalog.profile.streak_days);
    println!();

    println!("Courses:");
    for category in &catalog.course_categories {
        println!("  {:<16} {} courses", category.name, category.courses);
    }
    println!("  Popular now:");
    for course in catalog.popular_courses() {
        println!(
            "    {} ({}, {} lessons, {:.1}★)",
            course.title,
            course.difficulty.as_str(),
            course.lessons,
            course.rating
        );
    }
    println!();

    println!(
        "Fraud scenarios: {} of {} completed",
        catalog.scenarios_completed(),
        catalog.fraud_scenarios.len()
    );
    println!(
        "Achievements:    {} of {} earned",
        catalog.achievements_earned(),
        catalog.achievements.len()
    );
    println!();

    println!("Calculators:");
    for category in catalog.calculator_categories() {
        println!("  {:<12} {} tools", category, catalog.calculator_count(category));
    }
    println!();

    println!("Savings goals:");
    for goal in &catalog.savings_goals {
        println!(
            "  {:<16} {} of {} ({:.0}%, due {})",
            goal.title,
            format_inr(goal.current_amount),
            format_inr(goal.target_amount),
            goal.progress_pct(),
            goal.deadline
        );
    }

    Ok(())
}
