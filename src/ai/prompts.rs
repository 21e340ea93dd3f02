//! Instructional prompt templates for the Gemini calls.
//!
//! Every prompt pins the exact JSON shape the decode boundary expects and
//! forbids surrounding prose; code fences still slip through and are
//! stripped before decoding.

use crate::ai::types::DietProfile;

/// Prompt for natural-language food/action parsing.
#[must_use]
pub fn parse_prompt(input: &str) -> String {
    format!(
        r#"You are an AI assistant for a calorie tracking app called NutriBuddy. Parse the following user input and extract:
1. Food items with quantities and estimated serving sizes
2. Actions the user wants to perform
3. The overall intent

User input: "{input}"

Respond with a JSON object matching this structure:
{{
  "foods": [
    {{
      "name": "food name",
      "quantity_grams": number (in grams),
      "unit": "grams",
      "meal_type": "breakfast|lunch|dinner|snack" (if mentioned, otherwise omit),
      "confidence": 0.0-1.0
    }}
  ],
  "actions": [
    {{
      "type": "log_food|log_water|log_weight|request_feature|set_goal",
      "data": {{}}
    }}
  ],
  "intent": "brief description of what user wants",
  "confidence": 0.0-1.0
}}

Action data payloads:
- log_water: {{"amount_ml": number}}
- log_weight: {{"weight_kg": number}}
- request_feature: {{"description": "string"}}
- set_goal: {{"daily_calories": number}}

Common food serving sizes:
- 1 medium apple = 182g
- 1 slice bread = 28g
- 1 cup rice = 195g
- 100g chicken breast = 100g
- 1 banana = 118g
- 1 cup milk = 245ml

If user mentions water (250ml, 500ml, etc), create a log_water action.
If user mentions weight (70kg, lost 2 pounds, etc), create a log_weight action.
If user requests a new feature, create a request_feature action.
If user wants to set goals, create a set_goal action.
Do not include any other text or explanation."#
    )
}

/// Prompt for recipe suggestions from available ingredients.
#[must_use]
pub fn recipes_prompt(ingredients: &[String]) -> String {
    format!(
        r#"Given these ingredients: {}, suggest 3 possible recipes.
Return ONLY a valid JSON array of recipe objects with this exact format:
[
  {{
    "title": "Recipe Name",
    "ingredients": ["ingredient 1", "ingredient 2"],
    "instructions": ["step 1", "step 2"],
    "difficulty": "easy|medium|hard",
    "prepTime": "X mins",
    "cookTime": "X mins",
    "calories": 000,
    "servings": 0,
    "nutritionInfo": {{
      "protein": "Xg",
      "carbs": "Xg",
      "fat": "Xg",
      "fiber": "Xg"
    }}
  }}
]
For each recipe:
- Include only realistic, common recipes
- Use only common household ingredients
- Keep instructions clear and concise
- Ensure all ingredients are common and easily available
- Include accurate calorie and nutrition information per serving
Do not include any other text or explanation."#,
        ingredients.join(", ")
    )
}

/// Prompt for personalized diet-plan generation.
#[must_use]
pub fn diet_plan_prompt(profile: &DietProfile) -> String {
    format!(
        r#"Generate a personalized diet plan based on the following profile:
- BMI: {bmi:.1}
- Age: {age}
- Gender: {gender}
- Activity Level: {activity}
- Dietary Restrictions: {restrictions}
- Goals: {goals}

Return ONLY a valid JSON object with this exact format:
{{
  "dailyCalories": number,
  "macroSplit": {{
    "protein": number (in grams),
    "carbs": number (in grams),
    "fat": number (in grams)
  }},
  "recommendations": [
    {{
      "category": "string (meal type)",
      "foods": ["food1", "food2"],
      "reason": "string (explanation)"
    }}
  ]
}}

Ensure the plan is realistic and healthy. Include specific foods and portions.
Do not include any other text or explanation."#,
        bmi = profile.bmi(),
        age = profile.age,
        gender = profile.gender,
        activity = profile.activity_level,
        restrictions = profile.dietary_restrictions.join(", "),
        goals = profile.goals,
    )
}

/// Prompt for receipt line-item extraction (sent alongside the image).
#[must_use]
pub fn receipt_prompt() -> &'static str {
    r#"Please analyze this receipt image and extract product details.
Return ONLY a valid JSON array of objects with this exact format:
[
  {
    "name": "Product Name",
    "quantity": 1,
    "price": 0.00
  }
]
Include only pantry items, groceries, and household goods. Ensure prices are in decimal format.
Do not include any other text or explanation."#
}
