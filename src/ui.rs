use crate::config::{Layout, MAX_ITEMS_PER_ROW};
use anyhow::{Result, anyhow};
use console::{Key, Term};
use dialoguer::{Input, MultiSelect, Select};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Back,
    Quit,
    Index(usize),
}

pub fn prompt_menu(
    prompt: &str,
    items: &[String],
    default: Option<usize>,
    header: Option<&str>,
) -> Result<MenuChoice> {
    // Clear on menu entry
    let term = Term::stdout();
    let _ = term.clear_screen();

    if let Some(h) = header {
        println!("{}", h);
    }
    println!("{}", prompt);
    for (i, it) in items.iter().enumerate() {
        println!("{}: {}", i + 1, it);
    }
    println!("Type a number + Enter, or use arrow keys + Enter. 'b' = back, 'q' = quit.");

    // First key decides input mode: arrow-navigation vs text input
    match term.read_key()? {
        Key::ArrowUp | Key::ArrowDown | Key::Home | Key::End | Key::PageUp | Key::PageDown => {
            arrow_select(&term, prompt, items, default, header)
        }
        Key::Char('q') | Key::Char('Q') => Ok(MenuChoice::Quit),
        Key::Char('b') | Key::Char('B') | Key::Escape => Ok(MenuChoice::Back),
        Key::Enter => default
            .map(MenuChoice::Index)
            .ok_or_else(|| anyhow!("no selection")),
        Key::Char(c) if !c.is_control() => {
            // Fall back to text input initialized with the first typed char
            let input: String = Input::new()
                .with_prompt("Selection")
                .allow_empty(true)
                .with_initial_text(c.to_string())
                .interact_text()?;
            parse_selection(&input, items.len(), default)
        }
        _ => {
            let input: String = Input::new()
                .with_prompt("Selection")
                .allow_empty(true)
                .interact_text()?;
            parse_selection(&input, items.len(), default)
        }
    }
}

/// Interpret typed menu input: a 1-based index, `b`, `q`, or empty for the default.
pub fn parse_selection(input: &str, len: usize, default: Option<usize>) -> Result<MenuChoice> {
    let s = input.trim();
    if s.is_empty() {
        return default
            .map(MenuChoice::Index)
            .ok_or_else(|| anyhow!("no selection"));
    }
    if s.eq_ignore_ascii_case("q") {
        return Ok(MenuChoice::Quit);
    }
    if s.eq_ignore_ascii_case("b") {
        return Ok(MenuChoice::Back);
    }
    let idx: usize = s
        .parse::<usize>()
        .map_err(|_| anyhow!("invalid selection"))?;
    if idx == 0 || idx > len {
        return Err(anyhow!("out of range"));
    }
    Ok(MenuChoice::Index(idx - 1))
}

fn arrow_select(
    term: &Term,
    prompt: &str,
    items: &[String],
    default: Option<usize>,
    header: Option<&str>,
) -> Result<MenuChoice> {
    if items.is_empty() {
        return Ok(MenuChoice::Back);
    }
    let mut sel = default.unwrap_or(0).min(items.len() - 1);
    let mut top: usize = 0;
    loop {
        term.clear_screen()?;
        if let Some(h) = header {
            println!("{}", h);
        }
        println!("{}", prompt);

        let (rows, _cols) = term.size();
        let reserved: usize = 2 + usize::from(header.is_some()); // header + prompt + help
        let max_visible = (rows as usize)
            .saturating_sub(reserved)
            .max(3)
            .min(items.len());

        // keep selection in viewport
        if sel < top {
            top = sel;
        }
        if sel >= top + max_visible {
            top = sel + 1 - max_visible;
        }

        let end = (top + max_visible).min(items.len());
        for (i, item) in items.iter().enumerate().take(end).skip(top) {
            let marker = if i == sel { ">" } else { " " };
            println!("{} {}: {}", marker, i + 1, item);
        }
        println!("Use arrows + Enter. 'b' = back, 'q' = quit.");

        let step = max_visible.saturating_sub(1).max(1);
        match term.read_key()? {
            Key::ArrowUp => sel = sel.saturating_sub(1),
            Key::ArrowDown => sel = (sel + 1).min(items.len() - 1),
            Key::Home => sel = 0,
            Key::End => sel = items.len() - 1,
            Key::PageUp => sel = sel.saturating_sub(step),
            Key::PageDown => sel = (sel + step).min(items.len() - 1),
            Key::Enter => return Ok(MenuChoice::Index(sel)),
            Key::Char('q') | Key::Char('Q') => return Ok(MenuChoice::Quit),
            Key::Char('b') | Key::Char('B') | Key::Escape => return Ok(MenuChoice::Back),
            _ => {}
        }
    }
}

pub fn prompt_search(current: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Search news (empty = everything)")
        .allow_empty(true)
        .with_initial_text(current.to_string())
        .interact_text()?;
    Ok(input.trim().to_string())
}

/// Multiselect over `options`, preselecting `selected`.
pub fn prompt_categories(options: &[String], selected: &[String]) -> Result<Vec<String>> {
    let defaults: Vec<bool> = options.iter().map(|o| selected.contains(o)).collect();
    let picked = MultiSelect::new()
        .with_prompt("Select categories (space toggles, enter confirms)")
        .items(options)
        .defaults(&defaults)
        .interact()?;
    Ok(picked.into_iter().map(|i| options[i].clone()).collect())
}

pub fn prompt_layout(current: Layout) -> Result<Layout> {
    let options = ["Grid", "Full Width"];
    let default = match current {
        Layout::Grid => 0,
        Layout::FullWidth => 1,
    };
    let idx = Select::new()
        .with_prompt("Layout")
        .items(&options[..])
        .default(default)
        .interact()?;
    Ok(if idx == 0 { Layout::Grid } else { Layout::FullWidth })
}

pub fn prompt_items_per_row(current: u8) -> Result<u8> {
    let n: u8 = Input::new()
        .with_prompt(format!("Items per row (1-{})", MAX_ITEMS_PER_ROW))
        .default(current)
        .validate_with(|n: &u8| -> Result<(), String> {
            if (1..=MAX_ITEMS_PER_ROW).contains(n) {
                Ok(())
            } else {
                Err(format!("pick a number between 1 and {}", MAX_ITEMS_PER_ROW))
            }
        })
        .interact_text()?;
    Ok(n)
}
