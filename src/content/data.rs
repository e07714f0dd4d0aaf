//! Content catalog data structures
//!
//! Everything here is read-only display data: built once (or loaded from a
//! data file) and iterated/filtered by the screens. Icons, colors, and
//! thumbnails are left to the presentation layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Difficulty level of a course or learning module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

/// Difficulty of a fraud-awareness scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioDifficulty {
    Easy,
    Medium,
    Hard,
}

impl ScenarioDifficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioDifficulty::Easy => "Easy",
            ScenarioDifficulty::Medium => "Medium",
            ScenarioDifficulty::Hard => "Hard",
        }
    }
}

/// Kind of fraud a scenario trains against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FraudKind {
    Phishing,
    Otp,
    Identity,
    Investment,
}

impl FraudKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FraudKind::Phishing => "phishing",
            FraudKind::Otp => "otp",
            FraudKind::Identity => "identity",
            FraudKind::Investment => "investment",
        }
    }
}

/// A course in the learning catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub difficulty: Difficulty,
    /// Display duration, e.g. "2.5 hrs"
    pub duration: String,
    pub lessons: u32,
    pub enrolled: u32,
    pub rating: f64,
    /// Completion percent for a started course
    #[serde(default)]
    pub progress: Option<u8>,
    #[serde(default)]
    pub is_popular: bool,
}

/// A course category with its catalog size
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseCategory {
    pub id: u32,
    pub name: String,
    pub courses: u32,
}

/// An interactive fraud-awareness scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FraudScenario {
    pub id: u32,
    pub title: String,
    pub kind: FraudKind,
    pub description: String,
    pub difficulty: ScenarioDifficulty,
    #[serde(default)]
    pub completed: bool,
}

/// A security tip shown alongside the fraud scenarios
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityTip {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: String,
}

/// A gamification achievement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub earned: bool,
    #[serde(default)]
    pub progress: Option<u32>,
    #[serde(default)]
    pub total: Option<u32>,
}

impl Achievement {
    /// Completion fraction in [0, 1] for an in-progress achievement
    ///
    /// Earned achievements report 1.0; achievements without tracked
    /// progress report None.
    pub fn completion(&self) -> Option<f64> {
        if self.earned {
            return Some(1.0);
        }
        match (self.progress, self.total) {
            (Some(p), Some(t)) if t > 0 => Some((p as f64 / t as f64).min(1.0)),
            _ => None,
        }
    }
}

/// A savings goal tracked on the profile screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: u32,
    pub title: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub deadline: NaiveDate,
    pub category: String,
}

impl SavingsGoal {
    /// Progress toward the target in percent, capped at 100
    pub fn progress_pct(&self) -> f64 {
        if self.target_amount <= 0.0 {
            return 0.0;
        }
        (self.current_amount / self.target_amount * 100.0).min(100.0)
    }
}

/// A calculator tool listed on the calculate screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorTool {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: String,
}

/// A quick action tile on the home dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickAction {
    pub id: u32,
    pub title: String,
    pub description: String,
}

/// An in-progress learning module on the home dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningModule {
    pub id: u32,
    pub title: String,
    /// Completion percent
    pub progress: u8,
    pub lessons: u32,
    pub category: String,
    pub difficulty: Difficulty,
}

/// A page of the onboarding carousel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingStep {
    pub id: u32,
    pub title: String,
    pub description: String,
}

/// The demo user shown on the home and profile screens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    /// Display join date, e.g. "January 2025"
    pub member_since: String,
    pub total_points: u32,
    pub streak_days: u32,
    pub completed_modules: u32,
}

/// All static content the screens render
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentCatalog {
    pub courses: Vec<Course>,
    pub course_categories: Vec<CourseCategory>,
    pub fraud_scenarios: Vec<FraudScenario>,
    pub security_tips: Vec<SecurityTip>,
    pub achievements: Vec<Achievement>,
    pub savings_goals: Vec<SavingsGoal>,
    pub calculator_tools: Vec<CalculatorTool>,
    pub quick_actions: Vec<QuickAction>,
    pub learning_modules: Vec<LearningModule>,
    pub onboarding_steps: Vec<OnboardingStep>,
    pub profile: UserProfile,
}

impl ContentCatalog {
    /// Courses in the selected category, or all courses when none is selected
    pub fn courses_in_category(&self, category: Option<&str>) -> Vec<&Course> {
        self.courses
            .iter()
            .filter(|course| category.map_or(true, |c| course.category == c))
            .collect()
    }

    /// Courses flagged as popular
    pub fn popular_courses(&self) -> Vec<&Course> {
        self.courses.iter().filter(|c| c.is_popular).collect()
    }

    /// Calculator categories in first-appearance order
    pub fn calculator_categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for tool in &self.calculator_tools {
            if !categories.contains(&tool.category.as_str()) {
                categories.push(&tool.category);
            }
        }
        categories
    }

    /// Number of calculator tools in a category
    pub fn calculator_count(&self, category: &str) -> usize {
        self.calculator_tools
            .iter()
            .filter(|tool| tool.category == category)
            .count()
    }

    /// Number of achievements the user has earned
    pub fn achievements_earned(&self) -> usize {
        self.achievements.iter().filter(|a| a.earned).count()
    }

    /// Number of fraud scenarios the user has completed
    pub fn scenarios_completed(&self) -> usize {
        self.fraud_scenarios.iter().filter(|s| s.completed).count()
    }

    /// Built-in catalog reproducing the app's stock content
    pub fn builtin() -> Self {
        Self {
            courses: vec![
                Course {
                    id: 1,
                    title: "Personal Budgeting Mastery".into(),
                    description: "Learn to create and maintain a budget that works for your lifestyle".into(),
                    category: "Budgeting".into(),
                    difficulty: Difficulty::Beginner,
                    duration: "2.5 hrs".into(),
                    lessons: 8,
                    enrolled: 1250,
                    rating: 4.8,
                    progress: Some(75),
                    is_popular: true,
                },
                Course {
                    id: 2,
                    title: "Mutual Funds for Beginners".into(),
                    description: "Start your investment journey with mutual funds in India".into(),
                    category: "Investing".into(),
                    difficulty: Difficulty::Beginner,
                    duration: "3 hrs".into(),
                    lessons: 12,
                    enrolled: 2100,
                    rating: 4.9,
                    progress: Some(40),
                    is_popular: false,
                },
                Course {
                    id: 3,
                    title: "SIP Strategy & Planning".into(),
                    description: "Master Systematic Investment Plans for wealth creation".into(),
                    category: "Investing".into(),
                    difficulty: Difficulty::Intermediate,
                    duration: "4 hrs".into(),
                    lessons: 15,
                    enrolled: 1800,
                    rating: 4.7,
                    progress: None,
                    is_popular: false,
                },
                Course {
                    id: 4,
                    title: "Tax Saving Investments".into(),
                    description: "Maximize your tax savings with smart investment choices".into(),
                    category: "Tax Planning".into(),
                    difficulty: Difficulty::Intermediate,
                    duration: "3.5 hrs".into(),
                    lessons: 10,
                    enrolled: 950,
                    rating: 4.6,
                    progress: None,
                    is_popular: true,
                },
            ],
            course_categories: vec![
                CourseCategory { id: 1, name: "Budgeting".into(), courses: 12 },
                CourseCategory { id: 2, name: "Investing".into(), courses: 18 },
                CourseCategory { id: 3, name: "Credit & Loans".into(), courses: 8 },
                CourseCategory { id: 4, name: "Insurance".into(), courses: 6 },
                CourseCategory { id: 5, name: "Tax Planning".into(), courses: 10 },
            ],
            fraud_scenarios: vec![
                FraudScenario {
                    id: 1,
                    title: "Fake Bank SMS".into(),
                    kind: FraudKind::Phishing,
                    description: "Learn to identify fraudulent SMS messages claiming to be from your bank".into(),
                    difficulty: ScenarioDifficulty::Easy,
                    completed: true,
                },
                FraudScenario {
                    id: 2,
                    title: "OTP Sharing Scam".into(),
                    kind: FraudKind::Otp,
                    description: "Practice recognizing when someone tries to trick you into sharing OTP".into(),
                    difficulty: ScenarioDifficulty::Medium,
                    completed: false,
                },
                FraudScenario {
                    id: 3,
                    title: "Fake Investment Scheme".into(),
                    kind: FraudKind::Investment,
                    description: "Identify red flags in investment offers that seem too good to be true".into(),
                    difficulty: ScenarioDifficulty::Hard,
                    completed: false,
                },
                FraudScenario {
                    id: 4,
                    title: "Phishing Email".into(),
                    kind: FraudKind::Phishing,
                    description: "Spot fake emails trying to steal your banking credentials".into(),
                    difficulty: ScenarioDifficulty::Medium,
                    completed: true,
                },
            ],
            security_tips: vec![
                SecurityTip {
                    id: 1,
                    title: "Never Share OTP".into(),
                    description: "Banks and legitimate companies will never ask for your OTP over phone or email".into(),
                    category: "Authentication".into(),
                },
                SecurityTip {
                    id: 2,
                    title: "Verify Before Clicking".into(),
                    description: "Always check the sender's email address and URL before clicking any links".into(),
                    category: "Email Security".into(),
                },
                SecurityTip {
                    id: 3,
                    title: "Use Strong Passwords".into(),
                    description: "Create unique, complex passwords for each of your financial accounts".into(),
                    category: "Account Security".into(),
                },
                SecurityTip {
                    id: 4,
                    title: "Beware of Urgency".into(),
                    description: "Scammers create false urgency. Take time to verify before taking action".into(),
                    category: "General Awareness".into(),
                },
            ],
            achievements: vec![
                Achievement {
                    id: 1,
                    title: "First Steps".into(),
                    description: "Complete your first learning module".into(),
                    earned: true,
                    progress: None,
                    total: None,
                },
                Achievement {
                    id: 2,
                    title: "Fraud Fighter".into(),
                    description: "Complete 5 fraud prevention scenarios".into(),
                    earned: true,
                    progress: None,
                    total: None,
                },
                Achievement {
                    id: 3,
                    title: "Streak Master".into(),
                    description: "Maintain a 7-day learning streak".into(),
                    earned: false,
                    progress: Some(5),
                    total: Some(7),
                },
                Achievement {
                    id: 4,
                    title: "Calculator Pro".into(),
                    description: "Use 3 different financial calculators".into(),
                    earned: false,
                    progress: Some(1),
                    total: Some(3),
                },
            ],
            savings_goals: vec![
                SavingsGoal {
                    id: 1,
                    title: "Emergency Fund".into(),
                    target_amount: 100_000.0,
                    current_amount: 45_000.0,
                    deadline: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
                    category: "Savings".into(),
                },
                SavingsGoal {
                    id: 2,
                    title: "Vacation Fund".into(),
                    target_amount: 50_000.0,
                    current_amount: 12_000.0,
                    deadline: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
                    category: "Lifestyle".into(),
                },
            ],
            calculator_tools: vec![
                CalculatorTool {
                    id: 1,
                    title: "SIP Calculator".into(),
                    description: "Calculate returns on your systematic investment plan".into(),
                    category: "Investment".into(),
                },
                CalculatorTool {
                    id: 2,
                    title: "EMI Calculator".into(),
                    description: "Calculate your loan EMI and total interest payable".into(),
                    category: "Loans".into(),
                },
                CalculatorTool {
                    id: 3,
                    title: "FD Calculator".into(),
                    description: "Calculate fixed deposit maturity amount and interest".into(),
                    category: "Savings".into(),
                },
                CalculatorTool {
                    id: 4,
                    title: "Home Loan Calculator".into(),
                    description: "Calculate home loan EMI and affordability".into(),
                    category: "Loans".into(),
                },
                CalculatorTool {
                    id: 5,
                    title: "Goal Planning".into(),
                    description: "Plan and calculate investments for your financial goals".into(),
                    category: "Planning".into(),
                },
                CalculatorTool {
                    id: 6,
                    title: "Tax Calculator".into(),
                    description: "Calculate income tax and plan tax-saving investments".into(),
                    category: "Tax".into(),
                },
            ],
            quick_actions: vec![
                QuickAction {
                    id: 1,
                    title: "SIP Calculator".into(),
                    description: "Plan your investments".into(),
                },
                QuickAction {
                    id: 2,
                    title: "Fraud Alert".into(),
                    description: "Stay protected".into(),
                },
                QuickAction {
                    id: 3,
                    title: "Budget Tracker".into(),
                    description: "Track expenses".into(),
                },
                QuickAction {
                    id: 4,
                    title: "Tax Planner".into(),
                    description: "Save on taxes".into(),
                },
            ],
            learning_modules: vec![
                LearningModule {
                    id: 1,
                    title: "Budgeting Basics".into(),
                    progress: 75,
                    lessons: 8,
                    category: "Personal Finance".into(),
                    difficulty: Difficulty::Beginner,
                },
                LearningModule {
                    id: 2,
                    title: "Investment Fundamentals".into(),
                    progress: 40,
                    lessons: 12,
                    category: "Investing".into(),
                    difficulty: Difficulty::Intermediate,
                },
                LearningModule {
                    id: 3,
                    title: "Fraud Prevention".into(),
                    progress: 90,
                    lessons: 6,
                    category: "Security".into(),
                    difficulty: Difficulty::Beginner,
                },
            ],
            onboarding_steps: vec![
                OnboardingStep {
                    id: 1,
                    title: "Welcome to PaisaGuru".into(),
                    description: "Your trusted companion for financial literacy and fraud protection in India".into(),
                },
                OnboardingStep {
                    id: 2,
                    title: "Learn & Protect".into(),
                    description: "Master budgeting, investing, and stay safe from financial frauds".into(),
                },
                OnboardingStep {
                    id: 3,
                    title: "Track Your Progress".into(),
                    description: "Use smart calculators and track your financial goals effectively".into(),
                },
                OnboardingStep {
                    id: 4,
                    title: "Grow Your Wealth".into(),
                    description: "Get personalized tips and build long-term financial confidence".into(),
                },
            ],
            profile: UserProfile {
                name: "Arjun Sharma".into(),
                email: "arjun.sharma@email.com".into(),
                member_since: "January 2025".into(),
                total_points: 1250,
                streak_days: 7,
                completed_modules: 8,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_counts() {
        let catalog = ContentCatalog::builtin();

        assert_eq!(catalog.courses.len(), 4);
        assert_eq!(catalog.course_categories.len(), 5);
        assert_eq!(catalog.fraud_scenarios.len(), 4);
        assert_eq!(catalog.security_tips.len(), 4);
        assert_eq!(catalog.achievements.len(), 4);
        assert_eq!(catalog.savings_goals.len(), 2);
        assert_eq!(catalog.calculator_tools.len(), 6);
        assert_eq!(catalog.onboarding_steps.len(), 4);
    }

    #[test]
    fn test_course_filtering() {
        let catalog = ContentCatalog::builtin();

        // No selection shows the full catalog
        assert_eq!(catalog.courses_in_category(None).len(), 4);

        let investing = catalog.courses_in_category(Some("Investing"));
        assert_eq!(investing.len(), 2);
        assert!(investing.iter().all(|c| c.category == "Investing"));

        assert!(catalog.courses_in_category(Some("Nonexistent")).is_empty());
    }

    #[test]
    fn test_popular_courses() {
        let catalog = ContentCatalog::builtin();
        let popular = catalog.popular_courses();

        assert_eq!(popular.len(), 2);
        assert_eq!(popular[0].title, "Personal Budgeting Mastery");
    }

    #[test]
    fn test_calculator_categories() {
        let catalog = ContentCatalog::builtin();

        // First-appearance order, duplicates collapsed
        assert_eq!(
            catalog.calculator_categories(),
            vec!["Investment", "Loans", "Savings", "Planning", "Tax"]
        );
        assert_eq!(catalog.calculator_count("Loans"), 2);
        assert_eq!(catalog.calculator_count("Tax"), 1);
        assert_eq!(catalog.calculator_count("Nonexistent"), 0);
    }

    #[test]
    fn test_goal_progress() {
        let catalog = ContentCatalog::builtin();

        assert_eq!(catalog.savings_goals[0].progress_pct(), 45.0);
        assert_eq!(catalog.savings_goals[1].progress_pct(), 24.0);
    }

    #[test]
    fn test_goal_progress_caps_at_100() {
        let goal = SavingsGoal {
            id: 99,
            title: "Done".into(),
            target_amount: 1000.0,
            current_amount: 2500.0,
            deadline: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            category: "Savings".into(),
        };
        assert_eq!(goal.progress_pct(), 100.0);
    }

    #[test]
    fn test_goal_progress_zero_target() {
        let goal = SavingsGoal {
            id: 99,
            title: "Empty".into(),
            target_amount: 0.0,
            current_amount: 100.0,
            deadline: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            category: "Savings".into(),
        };
        assert_eq!(goal.progress_pct(), 0.0);
    }

    #[test]
    fn test_achievement_completion() {
        let catalog = ContentCatalog::builtin();

        assert_eq!(catalog.achievements[0].completion(), Some(1.0));
        assert_eq!(catalog.achievements[2].completion(), Some(5.0 / 7.0));
        assert_eq!(catalog.achievements_earned(), 2);
    }

    #[test]
    fn test_scenarios_completed() {
        let catalog = ContentCatalog::builtin();
        assert_eq!(catalog.scenarios_completed(), 2);
    }
}
