//! Turning two armed elements into a link.

use crate::diagram::Diagram;
use crate::link::{Link, LinkId};
use crate::selection::{InteractionSession, MAX_ARMED};
use crate::surface::DiagramSurface;

/// Build a link from the armed elements, if exactly two are armed.
///
/// The link runs from the first-armed element to the second-armed one, between
/// their current anchor points, with the arrowhead at the second. Armed
/// elements that are no longer registered are dropped first. On success the
/// armed selection is cleared; otherwise it is left as is.
pub fn try_build_link(
    diagram: &mut Diagram,
    session: &mut InteractionSession,
    head_size: f64,
    surface: &mut dyn DiagramSurface,
) -> Option<LinkId> {
    let registry = diagram.registry();
    let dropped = session.retain_armed(|r| registry.contains(*r));
    for stale in dropped {
        log::warn!("Dropping armed element {} that is no longer in the diagram", stale.id);
    }

    let [from, to] = session.armed() else {
        log::debug!(
            "Link needs {} armed elements, have {}",
            MAX_ARMED,
            session.armed().len()
        );
        return None;
    };
    let (from, to) = (*from, *to);

    let start = diagram.element(from.id)?.anchor();
    let end = diagram.element(to.id)?.anchor();

    let handle = surface.draw_arrow_segment(start, end);
    let mut link = Link::new(from.id, to.id, start, end).with_head_size(head_size);
    link.handle = Some(handle);
    let id = diagram.push_link(link);

    session.clear_armed();
    if session.preview_active() {
        surface.clear_preview();
        session.set_preview_active(false);
    }
    surface.redraw();

    log::info!("Created link {} -> {}", from.id, to.id);
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ElementKind, ElementRef};
    use crate::surface::testing::RecordingSurface;
    use kurbo::Point;
    use uuid::Uuid;

    #[test]
    fn test_needs_two_armed() {
        let mut diagram = Diagram::new();
        let mut session = InteractionSession::new();
        let mut surface = RecordingSurface::new();
        let a = diagram.registry_mut().add(ElementKind::Client, Point::ZERO);

        assert!(try_build_link(&mut diagram, &mut session, 10.0, &mut surface).is_none());
        session.arm(a);
        assert!(try_build_link(&mut diagram, &mut session, 10.0, &mut surface).is_none());
        assert_eq!(session.armed(), &[a]);
        assert!(diagram.links().is_empty());
        assert!(surface.arrows().is_empty());
    }

    #[test]
    fn test_builds_from_first_to_second() {
        let mut diagram = Diagram::new();
        let mut session = InteractionSession::new();
        let mut surface = RecordingSurface::new();
        let a = diagram.registry_mut().add(ElementKind::Client, Point::new(10.0, 20.0));
        let b = diagram.registry_mut().add(ElementKind::Router, Point::new(200.0, 80.0));
        session.arm(b);
        session.arm(a);

        let id = try_build_link(&mut diagram, &mut session, 10.0, &mut surface).unwrap();
        let link = diagram.link(id).unwrap();
        assert_eq!(link.from, b.id);
        assert_eq!(link.to, a.id);
        assert_eq!(link.start, Point::new(200.0, 80.0));
        assert_eq!(link.end, Point::new(10.0, 20.0));
        assert!(link.handle().is_some());
        assert!(session.armed().is_empty());
        assert_eq!(
            surface.arrows(),
            vec![(Point::new(200.0, 80.0), Point::new(10.0, 20.0))]
        );
    }

    #[test]
    fn test_stale_armed_element_is_dropped() {
        let mut diagram = Diagram::new();
        let mut session = InteractionSession::new();
        let mut surface = RecordingSurface::new();
        let a = diagram.registry_mut().add(ElementKind::Switch, Point::ZERO);
        let ghost = ElementRef {
            id: Uuid::new_v4(),
            kind: ElementKind::Client,
        };
        session.arm(ghost);
        session.arm(a);

        assert!(try_build_link(&mut diagram, &mut session, 10.0, &mut surface).is_none());
        assert_eq!(session.armed(), &[a]);
        assert!(diagram.links().is_empty());
    }
}
