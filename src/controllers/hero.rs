use std::rc::Rc;

use crate::dom::Dom;
use crate::markup::HERO_CONTENT_CLASS;
use crate::scheduler::Scheduler;

const HERO_OFFSET: &str = "translateY(24px)";
const HERO_TRANSITION: &str = "opacity 1s ease 0.3s, transform 1s ease 0.3s";

/// Fade the hero content in once the page has loaded.
///
/// Returns whether there was hero content to animate.
pub fn reveal_hero<D: Dom + 'static>(dom: &Rc<D>, scheduler: &dyn Scheduler) -> bool {
    let Some(hero) = dom.query_class(&dom.body(), HERO_CONTENT_CLASS).into_iter().next() else {
        tracing::debug!("No hero content to reveal");
        return false;
    };

    dom.set_style(&hero, "opacity", "0");
    dom.set_style(&hero, "transform", HERO_OFFSET);
    dom.set_style(&hero, "transition", HERO_TRANSITION);

    let dom = dom.clone();
    scheduler.next_frame(Box::new(move || {
        dom.set_style(&hero, "opacity", "1");
        dom.set_style(&hero, "transform", "none");
    }));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDom;
    use crate::scheduler::ManualScheduler;
    use crate::test_support::cafe_page;

    #[test]
    fn test_hero_starts_offset_then_settles_next_frame() {
        let page = cafe_page();
        let scheduler = ManualScheduler::new();

        assert!(reveal_hero(&page.dom, &scheduler));
        assert_eq!(page.dom.style(&page.hero, "opacity").as_deref(), Some("0"));
        assert_eq!(
            page.dom.style(&page.hero, "transform").as_deref(),
            Some("translateY(24px)")
        );
        assert_eq!(
            page.dom.style(&page.hero, "transition").as_deref(),
            Some(HERO_TRANSITION)
        );

        scheduler.advance_ms(0);
        assert_eq!(page.dom.style(&page.hero, "opacity").as_deref(), Some("1"));
        assert_eq!(
            page.dom.style(&page.hero, "transform").as_deref(),
            Some("none")
        );
    }

    #[test]
    fn test_missing_hero_is_noop() {
        let dom = Rc::new(MemoryDom::new());
        let scheduler = ManualScheduler::new();
        assert!(!reveal_hero(&dom, &scheduler));
        assert_eq!(scheduler.pending(), 0);
    }
}
