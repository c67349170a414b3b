use crate::models::{ActivityLevel, Gender, Profile};
use crate::planner::constants::{GOAL_CALORIES_FLOOR, IDEAL_BMI, MEAL_CEILING_FRACTION};

/// Harris-Benedict basal metabolic rate, rounded to whole calories.
///
/// Returns 0 for an incomplete profile.
pub fn compute_bmr(profile: &Profile) -> i32 {
    let Some(gender) = profile.gender.filter(|_| profile.is_complete()) else {
        return 0;
    };

    let age = profile.age as f64;
    let w = profile.weight_kg;
    let h = profile.height_cm;

    let bmr = match gender {
        Gender::Male => 66.0 + 13.7 * w + 5.0 * h - 6.76 * age,
        Gender::Female => 655.0 + 9.6 * w + 1.8 * h - 4.7 * age,
    };

    bmr.round() as i32
}

/// Suggested weight for the given height at BMI 22.
pub fn compute_expected_weight(height_cm: f64) -> u32 {
    if height_cm <= 0.0 {
        return 0;
    }
    let height_m = height_cm / 100.0;
    (IDEAL_BMI * height_m * height_m).round() as u32
}

/// Total daily energy expenditure.
pub fn compute_tdee(bmr: i32, activity: ActivityLevel) -> i32 {
    (bmr as f64 * activity.multiplier()).round() as i32
}

/// Maintenance plus goal adjustment, never below [`GOAL_CALORIES_FLOOR`].
pub fn compute_goal_calories(tdee: i32, adjustment: i32) -> i32 {
    (tdee + adjustment).max(GOAL_CALORIES_FLOOR)
}

/// Calorie budget for one meal slot.
pub fn meal_ceiling(goal_calories: i32) -> i32 {
    meal_ceiling_with_fraction(goal_calories, MEAL_CEILING_FRACTION)
}

pub fn meal_ceiling_with_fraction(goal_calories: i32, fraction: f64) -> i32 {
    if goal_calories <= 0 {
        return 0;
    }
    (goal_calories as f64 * fraction).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Goal;

    fn profile(age: u32, gender: Gender, height: f64, weight: f64) -> Profile {
        Profile {
            name: "Test".to_string(),
            age,
            gender: Some(gender),
            height_cm: height,
            weight_kg: weight,
        }
    }

    #[test]
    fn test_bmr_male() {
        // 66 + 959 + 875 - 169 = 1731
        assert_eq!(compute_bmr(&profile(25, Gender::Male, 175.0, 70.0)), 1731);
    }

    #[test]
    fn test_bmr_female() {
        // 655 + 576 + 297 - 141 = 1387
        assert_eq!(compute_bmr(&profile(30, Gender::Female, 165.0, 60.0)), 1387);
    }

    #[test]
    fn test_bmr_incomplete_profile_is_zero() {
        let mut p = profile(25, Gender::Male, 175.0, 70.0);
        p.gender = None;
        assert_eq!(compute_bmr(&p), 0);

        let mut p = profile(25, Gender::Male, 175.0, 70.0);
        p.age = 0;
        assert_eq!(compute_bmr(&p), 0);

        let p = profile(25, Gender::Female, 0.0, 70.0);
        assert_eq!(compute_bmr(&p), 0);
    }

    #[test]
    fn test_expected_weight() {
        // 22 * 1.75^2 = 67.375
        assert_eq!(compute_expected_weight(175.0), 67);
        assert_eq!(compute_expected_weight(180.0), 71); // 71.28
        assert_eq!(compute_expected_weight(0.0), 0);
    }

    #[test]
    fn test_tdee() {
        assert_eq!(compute_tdee(1859, ActivityLevel::Sedentary), 2231); // 2230.8
        assert_eq!(compute_tdee(1731, ActivityLevel::Moderate), 2683); // 2683.05
        assert_eq!(compute_tdee(0, ActivityLevel::VeryHeavy), 0);
    }

    #[test]
    fn test_goal_calories_ordering() {
        let tdee = 2000;
        let cut = compute_goal_calories(tdee, Goal::Cutting.calorie_adjustment());
        let keep = compute_goal_calories(tdee, Goal::EatHealthy.calorie_adjustment());
        let bulk = compute_goal_calories(tdee, Goal::Bulking.calorie_adjustment());
        assert_eq!((cut, keep, bulk), (1600, 2000, 2400));
    }

    #[test]
    fn test_goal_calories_never_negative() {
        assert_eq!(compute_goal_calories(300, -400), GOAL_CALORIES_FLOOR);
    }

    #[test]
    fn test_meal_ceiling() {
        assert_eq!(meal_ceiling(1831), 549); // 549.3
        assert_eq!(meal_ceiling(0), 0);
        assert_eq!(meal_ceiling_with_fraction(1000, 0.25), 250);
    }
}
