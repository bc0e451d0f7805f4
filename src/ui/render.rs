use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::list::MealList;
use crate::ui::spinner::Spinner;
use crate::ui::view::ScreenBranch;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let branch = app.branch();

    frame.render_widget(Header::new().widget(&branch), header);
    frame.render_widget(Clear, body);

    let position = match branch {
        ScreenBranch::Loading => {
            frame.render_widget(Spinner::new(app.spinner_frame()), body);
            None
        }
        ScreenBranch::List(items) => {
            frame.render_widget(MealList::new(items, app.scroll_offset()), body);
            Some((app.scroll_offset(), items.len()))
        }
    };

    frame.render_widget(Footer::new().widget(footer, position), footer);
}
