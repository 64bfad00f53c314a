use console::Style;
use once_cell::sync::Lazy;

pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static ERROR: Lazy<Style> = Lazy::new(|| Style::new().red());
pub static MUTED: Lazy<Style> = Lazy::new(|| Style::new().color256(245).italic());
pub static INDEX: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static OPERATOR: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static RULE_NAME: Lazy<Style> = Lazy::new(|| Style::new().bold());
