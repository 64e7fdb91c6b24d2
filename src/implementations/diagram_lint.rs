use std::collections::HashSet;

use log::debug;

use crate::models::diagram::{ DiagramIssue, DiagramReport, IssueSeverity };

/// Link operators, longest first so `-.->` wins over `-.-`
const LINK_OPERATORS: [&str; 7] = ["-.->", "==>", "-->", "~~~", "---", "-.-", "==="];

/// Openers of `A -- text --> B` style links and the operators that close them
const TEXT_LINKS: [(&str, &[&str]); 3] = [
    ("-- ", &["-->", "---"]),
    ("== ", &["==>", "==="]),
    ("-. ", &[".->", ".-"]),
];

/// Structural lint for Mermaid flowcharts.
///
/// Checks that `subgraph`/`end` markers balance, that the header comes first and that every
/// identifier used in a link was defined (as a node or subgraph) on an earlier line.
pub fn lint_diagram(source: &str) -> DiagramReport {
    let mut report = DiagramReport::default();
    let mut defined: HashSet<String> = HashSet::new();
    let mut open: Vec<(String, usize)> = Vec::new();
    let mut seen_header = false;

    for (index, raw) in source.lines().enumerate() {
        let line_number = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with("%%") {
            continue;
        }

        if !seen_header {
            seen_header = true;
            let keyword = line.split_whitespace().next().unwrap_or_default();
            if keyword == "flowchart" || keyword == "graph" {
                continue;
            }
            push(
                &mut report,
                IssueSeverity::Error,
                line_number,
                format!("expected a flowchart header, found '{}'", line)
            );
        }

        if let Some(rest) = keyword_rest(line, "subgraph") {
            match parse_identifier(rest) {
                Some((id, _)) => {
                    define(&mut report, &mut defined, id, line_number);
                    report.subgraph_count += 1;
                    open.push((id.to_string(), line_number));
                }
                None =>
                    push(
                        &mut report,
                        IssueSeverity::Error,
                        line_number,
                        "subgraph without an identifier".to_string()
                    ),
            }
            continue;
        }

        if line == "end" {
            if open.pop().is_none() {
                push(
                    &mut report,
                    IssueSeverity::Error,
                    line_number,
                    "'end' without a matching subgraph".to_string()
                );
            }
            continue;
        }

        if line.starts_with("direction ") {
            if open.is_empty() {
                push(
                    &mut report,
                    IssueSeverity::Warning,
                    line_number,
                    "'direction' outside of a subgraph".to_string()
                );
            }
            continue;
        }

        let segments = split_links(line);
        if segments.len() > 1 {
            let groups = segments.into_iter().map(split_ampersands).collect::<Vec<_>>();
            // `A & B --> C` is one link per pair of endpoints
            report.edge_count += groups
                .windows(2)
                .map(|pair| pair[0].len() * pair[1].len())
                .sum::<usize>();
            for endpoint in groups.iter().flatten() {
                check_endpoint(&mut report, &mut defined, endpoint, line_number);
            }
            continue;
        }

        match parse_identifier(line) {
            Some((id, _)) => {
                define(&mut report, &mut defined, id, line_number);
                report.node_count += 1;
            }
            None =>
                push(
                    &mut report,
                    IssueSeverity::Warning,
                    line_number,
                    format!("unrecognized statement '{}'", line)
                ),
        }
    }

    for (id, line_number) in open {
        push(
            &mut report,
            IssueSeverity::Error,
            line_number,
            format!("subgraph '{}' is never closed", id)
        );
    }

    debug!(
        "Diagram lint: {} subgraphs, {} nodes, {} links, {} issues",
        report.subgraph_count,
        report.node_count,
        report.edge_count,
        report.issues.len()
    );
    report
}

fn check_endpoint(
    report: &mut DiagramReport,
    defined: &mut HashSet<String>,
    segment: &str,
    line_number: usize
) {
    match parse_identifier(segment) {
        // Inline shape, e.g. `A[Label] --> B`, defines the node
        Some((id, true)) => {
            if defined.insert(id.to_string()) {
                report.node_count += 1;
            }
        }
        Some((id, false)) => {
            if !defined.contains(id) {
                push(
                    report,
                    IssueSeverity::Error,
                    line_number,
                    format!("'{}' is referenced before it is defined", id)
                );
            }
        }
        None =>
            push(
                report,
                IssueSeverity::Error,
                line_number,
                format!("link endpoint '{}' is not an identifier", segment)
            ),
    }
}

fn define(report: &mut DiagramReport, defined: &mut HashSet<String>, id: &str, line_number: usize) {
    if !defined.insert(id.to_string()) {
        push(report, IssueSeverity::Warning, line_number, format!("'{}' is defined twice", id));
    }
}

fn push(report: &mut DiagramReport, severity: IssueSeverity, line_number: usize, message: String) {
    report.issues.push(DiagramIssue { severity, message, line_number });
}

/// Text after `keyword` when the line starts with it as a whole word
fn keyword_rest<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(keyword)?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}

/// Leading identifier of a statement, and whether a shape/label follows it
fn parse_identifier(text: &str) -> Option<(&str, bool)> {
    let end = text
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_alphanumeric() || *c == '_'))
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    if end == 0 {
        return None;
    }
    let rest = text[end..].trim_start();
    let has_shape = rest.starts_with(['[', '(', '{', '>']);
    if !rest.is_empty() && !has_shape {
        return None;
    }
    Some((&text[..end], has_shape))
}

/// Split a statement on link operators, dropping `|label|` and `-- label -->` text
fn split_links(line: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut rest = line;
    loop {
        let operator = earliest(rest, &LINK_OPERATORS);
        let text_link = TEXT_LINKS.iter()
            .filter_map(|(open, closers)| rest.find(open).map(|pos| (pos, open.len(), *closers)))
            .min_by_key(|(pos, _, _)| *pos);

        match (operator, text_link) {
            (operator, Some((text_pos, open_len, closers)))
                if operator.map_or(true, |(pos, _)| text_pos < pos) => {
                segments.push(rest[..text_pos].trim());
                let label = &rest[text_pos + open_len..];
                rest = match earliest(label, closers) {
                    Some((close, len)) => label[close + len..].trim_start(),
                    None => label,
                };
            }
            (Some((pos, len)), _) => {
                segments.push(rest[..pos].trim());
                rest = rest[pos + len..].trim_start();
                if let Some(labelled) = rest.strip_prefix('|') {
                    rest = match labelled.find('|') {
                        Some(close) => labelled[close + 1..].trim_start(),
                        None => labelled,
                    };
                }
            }
            (None, _) => {
                segments.push(rest.trim());
                break;
            }
        }
    }
    segments
}

/// Position and length of the first operator in `text`, longest on ties
fn earliest(text: &str, operators: &[&str]) -> Option<(usize, usize)> {
    operators
        .iter()
        .filter_map(|op| text.find(op).map(|pos| (pos, op.len())))
        .min_by_key(|(pos, len)| (*pos, std::cmp::Reverse(*len)))
}

/// Split `A & B[Label]` into endpoints, ignoring `&` inside shapes and quotes
fn split_ampersands(segment: &str) -> Vec<&str> {
    let mut endpoints = Vec::new();
    let mut depth = 0usize;
    let mut quoted = false;
    let mut start = 0;
    for (i, c) in segment.char_indices() {
        match c {
            '"' => {
                quoted = !quoted;
            }
            '[' | '(' | '{' if !quoted => {
                depth += 1;
            }
            ']' | ')' | '}' if !quoted => {
                depth = depth.saturating_sub(1);
            }
            '&' if !quoted && depth == 0 => {
                endpoints.push(segment[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    endpoints.push(segment[start..].trim());
    endpoints
}
