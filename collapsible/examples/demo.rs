use std::fs::File;
use std::io::{self, Write};

use collapsible::dom::{Document, Element, ElementId, Event, Selector};
use collapsible::{PartialOptions, Registry};
use crossterm::event::{self, Event as CrosstermEvent, KeyCode};
use crossterm::{cursor, execute, terminal};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> io::Result<()> {
    // Set up file logging
    let log_file = File::create("collapsible.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut doc = Document::new(page());
    let root = doc.root();
    let mut widgets = Registry::new();

    let details = doc.by_id("details").expect("details panel");
    widgets
        .bind(&mut doc, details, Some(PartialOptions::new().collapsed(true)))
        .expect("bind details");
    widgets
        .enhance_default(&mut doc, root)
        .expect("enhance page");

    let buttons = Selector::parse("[role=button]").expect("selector");
    let headers = doc.query_all(root, &buttons);
    let mut focused = 0;

    terminal::enable_raw_mode()?;
    let result = run(&mut doc, &mut widgets, &headers, &mut focused);
    terminal::disable_raw_mode()?;
    result
}

fn run(
    doc: &mut Document,
    widgets: &mut Registry,
    headers: &[ElementId],
    focused: &mut usize,
) -> io::Result<()> {
    let mut stdout = io::stdout();

    loop {
        draw(&mut stdout, doc, widgets, headers, *focused)?;

        let CrosstermEvent::Key(key) = event::read()? else {
            continue;
        };
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
            KeyCode::Up => *focused = focused.saturating_sub(1),
            KeyCode::Down => *focused = (*focused + 1).min(headers.len().saturating_sub(1)),
            _ => {
                let Some(&target) = headers.get(*focused) else {
                    continue;
                };
                if let Some(event) = Event::from_crossterm_key(target, key) {
                    widgets.dispatch(doc, &event);
                }
            }
        }

        for notification in doc.take_notifications() {
            log::info!("{} on {}", notification.name, notification.target);
        }
    }
}

fn draw(
    out: &mut impl Write,
    doc: &Document,
    widgets: &Registry,
    headers: &[ElementId],
    focused: usize,
) -> io::Result<()> {
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    write!(out, "Up/Down to move, Enter/Space to toggle, q to quit\r\n\r\n")?;

    for (idx, header) in headers.iter().enumerate() {
        let Some(panel) = doc.parent(*header) else {
            continue;
        };
        let Some(widget) = widgets.get(panel) else {
            continue;
        };

        let marker = if widget.is_collapsed() { '+' } else { '-' };
        let pointer = if idx == focused { '>' } else { ' ' };
        let title = text_of(doc, *header);
        write!(out, "{pointer} [{marker}] {title}\r\n")?;

        if let Some(content) = widget.content() {
            if !widget.is_collapsed() {
                write!(out, "      {}\r\n", text_of(doc, content))?;
            }
        }
    }
    out.flush()
}

fn text_of(doc: &Document, id: ElementId) -> String {
    doc.get(id)
        .and_then(|node| node.text())
        .unwrap_or_default()
        .to_string()
}

fn page() -> Element {
    Element::div()
        .child(faq("shipping", "How long does shipping take?", "Three to five days."))
        .child(faq("returns", "Can I return an item?", "Within thirty days."))
        .child(faq("details", "Technical details", "Started collapsed by option."))
}

fn faq(id: &str, question: &str, answer: &str) -> Element {
    Element::div()
        .id(id)
        .class("collapsible")
        .child(Element::text(question))
        .child(Element::text(answer))
}
