//! Static content catalogs and their loader

mod data;
pub mod loader;

pub use data::{
    Achievement, CalculatorTool, ContentCatalog, Course, CourseCategory, Difficulty, FraudKind,
    FraudScenario, LearningModule, OnboardingStep, QuickAction, SavingsGoal, ScenarioDifficulty,
    SecurityTip, UserProfile,
};
pub use loader::{load_catalog, load_catalog_from_reader, load_default_catalog};
