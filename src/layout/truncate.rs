use crate::layout::WrappedLine;
use crate::{FontSpec, Measurer, Pt, WrapConfig};

/// Limits `lines` to `config.max_line_count` lines and measures each kept line.
///
/// When lines had to be dropped, the last kept line is elided: characters are
/// removed from its end until it fits within `config.max_width` together with
/// `config.ellipsis`, which is then appended. If even the bare ellipsis is too wide
/// it is emitted on its own. A dropped line counts even when it is empty, so a
/// trailing blank line past the cap still elides the last kept line.
///
/// A `max_line_count` of `0` keeps every line.
pub fn truncate_lines<M: Measurer + ?Sized>(
    mut lines: Vec<String>,
    font: &FontSpec,
    config: &WrapConfig,
    measurer: &M,
) -> Vec<WrappedLine> {
    let limit = config.max_line_count;
    if limit > 0 && lines.len() > limit {
        let dropped = lines.len() - limit;
        lines.truncate(limit);
        if let Some(last) = lines.last_mut() {
            elide(last, font, config, measurer);
            tracing::debug!(dropped, limit, "truncated wrapped lines");
        }
    }

    lines
        .into_iter()
        .map(|content| WrappedLine {
            width: measurer.measure(&content, font),
            content,
        })
        .collect()
}

fn elide<M: Measurer + ?Sized>(
    line: &mut String,
    font: &FontSpec,
    config: &WrapConfig,
    measurer: &M,
) {
    while !line.is_empty()
        && measurer.measure(&format!("{line}{}", config.ellipsis), font) > config.max_width
    {
        line.pop();
    }
    tracing::trace!(kept = %line, "elided line");
    line.push_str(&config.ellipsis);
}

/// The width of the widest line, or zero if there are no lines
pub fn max_line_width(lines: &[WrappedLine]) -> Pt {
    lines.iter().fold(Pt(0.0), |widest, line| widest.max(line.width))
}
