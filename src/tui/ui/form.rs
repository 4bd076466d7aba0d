//! Domain form: editable fields beside the reference notes.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::application::{Banner, Session};
use crate::domain::{DescriptionTable, FormField};
use crate::tui::styles::MedicalTheme;

/// Render the selected domain's form, reference column, and footer.
pub fn render_form(f: &mut Frame, area: Rect, session: &Session) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Form body
            Constraint::Length(3), // Banner / key hints
        ])
        .split(area);

    // 3/4 fields, 1/4 reference notes
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(3, 4), Constraint::Ratio(1, 4)])
        .split(rows[0]);

    let profile = session.fields().profile();
    render_fields(
        f,
        columns[0],
        session.fields().fields(),
        session.focused(),
        profile.action,
    );
    render_descriptions(f, columns[1], profile.descriptions);
    render_footer(f, rows[1], session.banner());
}

fn render_fields(f: &mut Frame, area: Rect, fields: &[FormField], focused: usize, action: &str) {
    let block = Block::default()
        .title(Span::styled(" Enter Patient Details ", MedicalTheme::subtitle()))
        .title_bottom(Span::styled(
            format!(" [Enter] {action} "),
            MedicalTheme::key_hint(),
        ))
        .borders(Borders::ALL)
        .border_style(MedicalTheme::border_focused());

    let label_width = fields
        .iter()
        .map(|field| field.label.chars().count())
        .max()
        .unwrap_or(0);

    let lines: Vec<Line> = fields
        .iter()
        .enumerate()
        .map(|(i, field)| field_line(field, i == focused, label_width))
        .collect();

    // Keep the focused row visible when the form is taller than the pane.
    let visible = area.height.saturating_sub(2) as usize;
    let offset = if visible == 0 || focused < visible {
        0
    } else {
        focused + 1 - visible
    };

    let p = Paragraph::new(lines)
        .block(block)
        .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0));

    f.render_widget(p, area);
}

fn field_line(field: &FormField, is_focused: bool, label_width: usize) -> Line<'_> {
    let (marker, label_style) = if is_focused {
        ("▸ ", MedicalTheme::focused())
    } else {
        ("  ", MedicalTheme::text_secondary())
    };

    let value = if field.value.is_empty() && !is_focused {
        Span::styled("—", MedicalTheme::text_muted())
    } else {
        Span::styled(field.value.as_str(), MedicalTheme::text())
    };

    Line::from(vec![
        Span::styled(marker, label_style),
        Span::styled(
            format!("{:<width$}", field.label, width = label_width),
            label_style,
        ),
        Span::raw("  "),
        value,
        if is_focused {
            Span::styled("▌", MedicalTheme::cursor())
        } else {
            Span::raw("")
        },
    ])
}

fn render_descriptions(f: &mut Frame, area: Rect, descriptions: DescriptionTable) {
    let lines: Vec<Line> = descriptions
        .iter()
        .map(|(key, text)| {
            Line::from(vec![
                Span::styled(format!("{key}: "), MedicalTheme::title()),
                Span::styled(*text, MedicalTheme::text_secondary()),
            ])
        })
        .collect();

    let p = Paragraph::new(lines)
        .block(
            Block::default()
                .title(Span::styled(" Feature Information ", MedicalTheme::subtitle()))
                .borders(Borders::ALL)
                .border_style(MedicalTheme::border()),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(p, area);
}

fn render_footer(f: &mut Frame, area: Rect, banner: Option<&Banner>) {
    let content = match banner {
        Some(Banner::Success(message)) => Line::from(vec![
            Span::styled("✔ ", MedicalTheme::success()),
            Span::styled(message.as_str(), MedicalTheme::success()),
        ]),
        Some(Banner::Error(message)) => Line::from(vec![
            Span::styled("! ", MedicalTheme::danger()),
            Span::styled(message.as_str(), MedicalTheme::danger()),
        ]),
        None => Line::from(vec![
            Span::styled("[←→] ", MedicalTheme::key_hint()),
            Span::styled("Domain ", MedicalTheme::key_desc()),
            Span::styled("[↑↓] ", MedicalTheme::key_hint()),
            Span::styled("Navigate ", MedicalTheme::key_desc()),
            Span::styled("[Enter] ", MedicalTheme::key_hint()),
            Span::styled("Predict ", MedicalTheme::key_desc()),
            Span::styled("[S] ", MedicalTheme::key_hint()),
            Span::styled("Sample Data ", MedicalTheme::key_desc()),
            Span::styled("[Del] ", MedicalTheme::key_hint()),
            Span::styled("Clear ", MedicalTheme::key_desc()),
            Span::styled("[Esc] ", MedicalTheme::key_hint()),
            Span::styled("Quit", MedicalTheme::key_desc()),
        ]),
    };

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Disease;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn render(session: &Session) -> Buffer {
        render_sized(session, 140, 32)
    }

    fn render_sized(session: &Session, width: u16, height: u16) -> Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal
            .draw(|f| render_form(f, f.area(), session))
            .expect("draw");
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_rendering_is_idempotent() {
        for disease in Disease::ALL {
            let mut session = Session::new(disease);
            session.load_sample();
            assert_eq!(render(&session), render(&session));
        }
    }

    #[test]
    fn test_renders_labels_and_notes() {
        let session = Session::new(Disease::Diabetes);
        let screen = text(&render(&session));
        assert!(screen.contains("Pregnancies"));
        assert!(screen.contains("Diabetes Pedigree Function"));
        assert!(screen.contains("Feature Information"));
        assert!(screen.contains("Normal: 70-99 mg/dL"));
    }

    #[test]
    fn test_focused_row_stays_visible() {
        let mut session = Session::new(Disease::Parkinsons);
        for _ in 0..21 {
            session.focus_next();
        }
        let screen = text(&render_sized(&session, 140, 16));
        assert!(screen.contains("▸ PPE"));
    }
}
