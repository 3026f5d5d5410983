//! One-shot section reveal driven by viewport intersection.

use dioxus::prelude::*;

/// Scroll alignment for [`SectionHandle::scroll_into_view`].
///
/// Defaults to a smooth scroll aligning the section top with the
/// viewport. Override individual fields with struct update syntax.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollOptions {
    pub behavior: &'static str,
    pub block: &'static str,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            behavior: "smooth",
            block: "start",
        }
    }
}

/// Handle addressing a revealable section by element id.
///
/// Every method resolves the element at call time and does nothing when
/// the id matches no node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionHandle {
    id: String,
}

impl SectionHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Scrolls the section into view.
    pub fn scroll_into_view(&self, options: ScrollOptions) {
        document::eval(&format!(
            "var el = document.getElementById('{}'); if(el) el.scrollIntoView({{behavior: '{}', block: '{}'}});",
            self.id, options.behavior, options.block
        ));
    }

    /// Makes the section participate in layout again.
    pub fn show(&self) {
        document::eval(&format!(
            "var el = document.getElementById('{}'); if(el) el.style.display = 'block';",
            self.id
        ));
    }

    /// Removes the section from layout.
    pub fn hide(&self) {
        document::eval(&format!(
            "var el = document.getElementById('{}'); if(el) el.style.display = 'none';",
            self.id
        ));
    }
}

/// Section wrapper that marks itself visible once when it first scrolls
/// into the viewport.
///
/// The reveal is one-shot: after `data-visible` flips to true the
/// section is unobserved and the attribute never reverts, so scrolling
/// away and back does not replay the entrance animation.
#[component]
pub fn RevealSection(section_id: String, children: Element) -> Element {
    let observed_id = section_id.clone();

    // Observe once after mount. A tenth of the section (with a 50px
    // margin) counts as in view.
    use_effect(move || {
        document::eval(&format!(
            r#"
            var el = document.getElementById('{observed_id}');
            if (el && 'IntersectionObserver' in window) {{
                var observer = new IntersectionObserver(function(entries) {{
                    entries.forEach(function(entry) {{
                        if (entry.isIntersecting) {{
                            entry.target.setAttribute('data-visible', 'true');
                            observer.unobserve(entry.target);
                        }}
                    }});
                }}, {{ threshold: 0.1, rootMargin: '50px' }});
                observer.observe(el);
            }}
            "#
        ));
    });

    rsx! {
        section {
            id: "{section_id}",
            class: "reveal-section",
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_defaults_are_smooth_top_aligned() {
        let opts = ScrollOptions::default();
        assert_eq!(opts.behavior, "smooth");
        assert_eq!(opts.block, "start");
    }

    #[test]
    fn scroll_overrides_merge_over_defaults() {
        let opts = ScrollOptions {
            block: "center",
            ..Default::default()
        };
        assert_eq!(opts.behavior, "smooth");
        assert_eq!(opts.block, "center");
    }
}
