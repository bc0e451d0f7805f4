use serde::{Deserialize, Deserializer};

/// Separator between the category and area in a card subtitle.
pub const SUBTITLE_SEPARATOR: &str = " • ";

/// Maximum number of ingredient names shown on a card.
pub const PREVIEW_INGREDIENTS: usize = 3;

/// A single meal as served by the API.
///
/// Every field is an opaque string the server may omit or send as `null`.
/// Unknown fields in the payload are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MealRecord {
    #[serde(rename = "idMeal", default)]
    pub id_meal: Option<String>,
    #[serde(rename = "strMeal", default)]
    pub name: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(rename = "strIngredient1", default)]
    pub ingredient1: Option<String>,
    #[serde(rename = "strIngredient2", default)]
    pub ingredient2: Option<String>,
    #[serde(rename = "strIngredient3", default)]
    pub ingredient3: Option<String>,
    #[serde(rename = "strIngredient4", default)]
    pub ingredient4: Option<String>,
    #[serde(rename = "strIngredient5", default)]
    pub ingredient5: Option<String>,
    #[serde(rename = "strIngredient6", default)]
    pub ingredient6: Option<String>,
}

impl MealRecord {
    /// Display title, empty when the server sent none.
    pub fn title(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// `"<category> • <area>"`.
    pub fn subtitle(&self) -> String {
        format!(
            "{}{}{}",
            self.category.as_deref().unwrap_or(""),
            SUBTITLE_SEPARATOR,
            self.area.as_deref().unwrap_or("")
        )
    }

    /// Non-blank ingredient names in slot order.
    pub fn ingredients(&self) -> Vec<&str> {
        [
            &self.ingredient1,
            &self.ingredient2,
            &self.ingredient3,
            &self.ingredient4,
            &self.ingredient5,
            &self.ingredient6,
        ]
        .into_iter()
        .filter_map(|slot| slot.as_deref())
        .filter(|name| !name.trim().is_empty())
        .collect()
    }

    /// First few ingredient names joined for the card footer line.
    pub fn ingredient_preview(&self) -> String {
        self.ingredients()
            .into_iter()
            .take(PREVIEW_INGREDIENTS)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// One snapshot of the meal list, in server order.
///
/// Decodes `{"meals": [...]}`. A `null` or missing `meals` key yields an
/// empty collection and `null` entries inside the array are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MealCollection {
    #[serde(rename = "meals", default, deserialize_with = "deserialize_meals")]
    items: Vec<MealRecord>,
}

impl MealCollection {
    pub fn new(items: Vec<MealRecord>) -> Self {
        Self { items }
    }

    /// Decode a response body.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    pub fn items(&self) -> &[MealRecord] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn deserialize_meals<'de, D>(deserializer: D) -> Result<Vec<MealRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let meals: Option<Vec<Option<MealRecord>>> = Option::deserialize(deserializer)?;
    Ok(meals.unwrap_or_default().into_iter().flatten().collect())
}
