//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_server;

use mealboard::ui::app::App;
use mealboard::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use serde_json::{json, Value};
use std::io;
use std::sync::{Arc, Mutex};
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

/// One meal object in the shape the API serves.
pub fn meal_json(id: u32, name: &str, category: &str, area: &str) -> Value {
    json!({
        "idMeal": id.to_string(),
        "strMeal": name,
        "strMealThumb": format!("https://www.themealdb.com/images/media/meals/{id}.jpg"),
        "strCategory": category,
        "strArea": area,
        "strIngredient1": "Flour",
        "strIngredient2": "Butter",
        "strIngredient3": "",
        "strIngredient4": "Sugar",
        "strIngredient5": null,
        "strIngredient6": "Eggs",
        "strInstructions": "Mix and bake.",
        "strYoutube": "https://www.youtube.com/watch?v=abc"
    })
}

/// Three meals starting with "a", as returned by the search endpoint.
pub fn three_meals_body() -> String {
    json!({
        "meals": [
            meal_json(52768, "Apple Frangipan Tart", "Dessert", "British"),
            meal_json(52893, "Apple & Blackberry Crumble", "Dessert", "British"),
            meal_json(53049, "Apam balik", "Dessert", "Malaysian"),
        ]
    })
    .to_string()
}

/// Render `app` into an off-screen buffer and return it as text, one line
/// per row.
pub fn render_to_string(app: &App, cols: u16, rows: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(cols, rows)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..rows {
        for x in 0..cols {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

/// In-memory log sink for asserting on emitted log lines.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Capture logs emitted on this thread until the guard drops.
pub fn capture_logs() -> (LogCapture, DefaultGuard) {
    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (capture, guard)
}
