// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Energy densities, unit conversions, storage keys, and tracking goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Energy density of macronutrients (Atwater factors)
pub mod energy {
    /// Kilocalories per gram of protein
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// Kilocalories per gram of fat
    pub const KCAL_PER_G_FAT: f64 = 9.0;
}

/// Imperial to metric conversions
pub mod units {
    /// Kilograms per pound
    pub const KG_PER_LB: f64 = 0.453_592;
    /// Centimeters per inch
    pub const CM_PER_INCH: f64 = 2.54;
    /// Inches per foot
    pub const INCHES_PER_FOOT: u32 = 12;
}

/// Keys under which each top-level entity is persisted
pub mod storage_keys {
    /// User profile
    pub const USER_PROFILE: &str = "userProfile";
    /// Computed macro targets
    pub const MACROS: &str = "macros";
    /// Food preferences
    pub const FOOD_PREFERENCES: &str = "foodPreferences";
    /// Selected recipe ids
    pub const SELECTED_RECIPES: &str = "selectedRecipes";
    /// Favorite recipe ids
    pub const FAVORITE_RECIPES: &str = "favoriteRecipes";
    /// Current multi-recipe meal plan
    pub const CURRENT_MEAL_PLAN: &str = "currentMealPlan";
    /// Weekly meal plan
    pub const WEEKLY_MEAL_PLAN: &str = "weeklyMealPlan";
    /// Saved meal plans list
    pub const SAVED_MEAL_PLANS: &str = "savedMealPlans";
    /// Whether the user finished meal selection
    pub const MEALS_SELECTED: &str = "mealsSelected";
    /// Daily or weekly plan selector
    pub const PLAN_TYPE: &str = "planType";
    /// Date-stamped daily tracking record
    pub const DAILY_TRACKING: &str = "dailyTracking";

    /// Every key, used by "reset all data"
    pub const ALL: [&str; 11] = [
        USER_PROFILE,
        MACROS,
        FOOD_PREFERENCES,
        SELECTED_RECIPES,
        FAVORITE_RECIPES,
        CURRENT_MEAL_PLAN,
        WEEKLY_MEAL_PLAN,
        SAVED_MEAL_PLANS,
        MEALS_SELECTED,
        PLAN_TYPE,
        DAILY_TRACKING,
    ];

    /// Schema version written into every persisted envelope
    pub const SCHEMA_VERSION: u32 = 1;
}

/// Daily tracking goals
pub mod tracking {
    /// Glasses of water per day (16 oz each)
    pub const WATER_GLASSES_GOAL: u32 = 8;
}

/// Items of the daily checklists, in display order
pub mod checklists {
    /// Upon waking
    pub const MORNING_PROTOCOL: [&str; 4] = [
        "2 tbsp chia seeds in water with electrolytes",
        "Cup of kefir",
        "Banana",
        "1-2 scoops raw honey before gym",
    ];
    /// Daily supplements
    pub const SUPPLEMENTS: [&str; 6] = [
        "Creatine monohydrate",
        "Vitamin C",
        "Vitamin D3 (5000 units)",
        "Omega 3 fish oil",
        "Zinc with copper",
        "Magnesium glycinate",
    ];
    /// Last thing before sleep
    pub const BEFORE_BED_RITUAL: [&str; 3] = [
        "3 kiwis with blueberries only",
        "Protein shake (1-2 scoops)",
        "Always with creatine",
    ];
}

/// Food preference rules
pub mod preferences {
    /// Minimum number of foods that must be picked from each category
    pub const MIN_FOODS_PER_CATEGORY: usize = 3;
}

/// Service names for structured logging
pub mod service_names {
    /// Library / CLI service name
    pub const MACROPLAN: &str = "macroplan";
    /// AI meal generation collaborator
    pub const AI_MEAL_SERVICE: &str = "AI meal service";
}
