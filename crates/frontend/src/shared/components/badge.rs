use contracts::domain::a006_status::aggregate::DEFAULT_STATUS_COLOR;
use contracts::shared::validation::hex_color;
use leptos::prelude::*;

/// Dark text on light backgrounds, white otherwise (`#RGB` is expanded first)
fn text_color_for(background: &str) -> &'static str {
    let Some(digits) = background.strip_prefix('#') else {
        return "#fff";
    };
    let full: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        _ => digits.to_string(),
    };
    let channel = |i: usize| full.get(i..i + 2).and_then(|h| u8::from_str_radix(h, 16).ok());
    match (channel(0), channel(2), channel(4)) {
        (Some(r), Some(g), Some(b)) => {
            let luma = 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
            if luma > 160.0 {
                "#111827"
            } else {
                "#fff"
            }
        }
        _ => "#fff",
    }
}

/// Status badge painted with the status color; an invalid color falls back to the default
#[component]
pub fn ColorBadge(
    #[prop(into)]
    label: String,
    #[prop(into)]
    color: String,
) -> impl IntoView {
    let background = hex_color(&color).unwrap_or_else(|_| DEFAULT_STATUS_COLOR.to_string());
    let style = format!("background: {}; color: {};", background, text_color_for(&background));
    view! {
        <span class="badge badge--color" style=style>{label}</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_color_for() {
        assert_eq!(text_color_for("#3B82F6"), "#fff");
        assert_eq!(text_color_for("#FACC15"), "#111827");
        assert_eq!(text_color_for("#FFF"), "#111827");
        assert_eq!(text_color_for("red"), "#fff");
    }
}
