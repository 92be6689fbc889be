//! Step description pane

use super::pane_block;
use crate::step::{Algorithm, Step, Value};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Data needed to render the description pane
pub struct DescriptionRenderData<'a> {
    pub algorithm: Algorithm,
    pub position: Option<usize>,
    /// Zero until steps have been generated
    pub total_steps: usize,
    pub current_step: Option<&'a Step>,
    pub input: &'a [Value],
}

fn headline(data: &DescriptionRenderData) -> String {
    match (data.position, data.current_step) {
        (Some(position), Some(step)) => format!(
            "Step {}/{}: {}",
            position + 1,
            data.total_steps,
            step.description
        ),
        _ if data.total_steps > 0 => format!(
            "{} steps ready. Press space to play or → to step.",
            data.total_steps
        ),
        _ => format!("Press space to run {}.", data.algorithm.name()),
    }
}

/// Render "Step k/n: description". The technical view adds the step kind,
/// the indices it touches, and the input the run started from.
pub fn render_description_pane(
    frame: &mut Frame,
    area: Rect,
    data: DescriptionRenderData,
    technical: bool,
) {
    let mut lines = vec![Line::from(Span::styled(
        headline(&data),
        Style::default()
            .fg(DEFAULT_THEME.fg)
            .add_modifier(Modifier::BOLD),
    ))];

    if technical {
        let label = Style::default().fg(DEFAULT_THEME.comment);
        let value = Style::default().fg(DEFAULT_THEME.secondary);

        let mut detail = Vec::new();
        if let Some(step) = data.current_step {
            detail.push(Span::styled("kind ", label));
            detail.push(Span::styled(step.kind().to_string(), value));
            if !step.indices().is_empty() {
                detail.push(Span::styled("  indices ", label));
                detail.push(Span::styled(format!("{:?}", step.indices()), value));
            }
            if let Some((from, to)) = step.edge() {
                detail.push(Span::styled("  edge ", label));
                detail.push(Span::styled(format!("{} → {}", from, to), value));
            } else if let Some(node) = step.node_id() {
                detail.push(Span::styled("  node ", label));
                detail.push(Span::styled(node.to_string(), value));
            }
        }
        lines.push(Line::from(detail));

        if data.algorithm.uses_input() {
            let input: Vec<String> = data.input.iter().map(Value::to_string).collect();
            lines.push(Line::from(vec![
                Span::styled("input ", label),
                Span::styled(format!("[{}]", input.join(", ")), value),
            ]));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(pane_block("Step", false))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
