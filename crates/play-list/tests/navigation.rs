use play_list::input::InputEvent;
use play_list::input::KeyCode;
use play_list::input::MouseEvent;
use play_list::keymap;
use play_list::play_list::PlayList;
use play_list::play_list::PlayListAction;
use play_list::slide::Slide;
use play_list::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

fn play_list(n: usize, wrap: bool) -> PlayList {
    let mut p = PlayList::from_slides(
        (0..n).map(|i| Slide::new(format!("kicker {i}"), format!("Slide title {i}"))),
    );
    p.set_wrap(wrap);
    p
}

fn assert_single_active(p: &PlayList) {
    let active: Vec<usize> = p
        .slides()
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_active())
        .map(|(i, _)| i)
        .collect();
    if p.is_empty() {
        assert!(active.is_empty());
    } else {
        assert_eq!(active, vec![p.index()]);
    }
}

fn rendered(p: &mut PlayList, area: Rect) -> Buffer {
    let mut buf = Buffer::empty(area);
    p.render(area, &mut buf, &Theme::default());
    buf
}

fn row(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width)
        .map(|x| buf[(x, y)].symbol().to_string())
        .collect()
}

#[test]
fn index_stays_valid_and_one_slide_active() {
    for n in 0..=8usize {
        for wrap in [true, false] {
            let mut p = play_list(n, wrap);
            for step in 0..30usize {
                match step % 5 {
                    0 | 3 => {
                        p.next();
                    }
                    1 => {
                        p.prev();
                    }
                    2 => {
                        p.go_to(step * 3);
                    }
                    _ => {
                        p.go_to_signed(-(step as i64));
                    }
                }
                assert!(p.index() < n.max(1), "n={n} wrap={wrap}");
                assert_single_active(&p);
            }
        }
    }
}

#[test]
fn next_n_times_with_wrap_returns_to_start() {
    for n in 1..=6usize {
        for start in 0..n {
            let mut p = play_list(n, true);
            p.go_to(start);
            for _ in 0..n {
                p.next();
            }
            assert_eq!(p.index(), start);
        }
    }
}

#[test]
fn every_valid_index_activates_exactly_that_slide() {
    let mut p = play_list(5, false);
    for i in 0..5 {
        p.go_to(i);
        assert_single_active(&p);
        assert!(p.slides()[i].is_active());
    }
}

#[test]
fn four_slides_wrapping_forward_four_times() {
    let mut p = play_list(4, true);
    for _ in 0..4 {
        p.next();
    }
    assert_eq!(p.index(), 0);
}

#[test]
fn four_slides_clamped_prev_at_start() {
    let mut p = play_list(4, false);
    assert!(!p.prev());
    assert_eq!(p.index(), 0);
    p.last();
    assert!(!p.next());
    assert_eq!(p.index(), 3);
}

#[test]
fn single_slide_is_inert_and_controls_hidden() {
    let mut p = play_list(1, true);
    assert!(!p.next());
    assert!(!p.prev());
    assert!(!p.nav_controls().visible);

    let buf = rendered(&mut p, Rect::new(0, 0, 30, 8));
    assert!(p.layout().prev.is_none());
    assert!(p.layout().dots.is_empty());
    assert!(!row(&buf, 4).contains('‹'));
}

#[test]
fn empty_play_list_renders_nothing_and_ignores_input() {
    let mut p = PlayList::new();
    let area = Rect::new(0, 0, 20, 5);
    let buf = rendered(&mut p, area);
    assert_eq!(buf, Buffer::empty(area));
    assert_eq!(
        p.handle_event(InputEvent::Key(keymap::key(KeyCode::Right))),
        PlayListAction::None
    );
    assert_eq!(p.index(), 0);
}

#[test]
fn clicking_a_dot_goes_to_its_slide() {
    for k in 0..4 {
        let mut p = play_list(4, false);
        rendered(&mut p, Rect::new(0, 0, 40, 10));
        let dot = p.layout().dots[k];
        p.handle_event(InputEvent::Mouse(MouseEvent::click(dot.x, dot.y)));
        assert_eq!(p.index(), k);
        assert_single_active(&p);
    }
}

#[test]
fn clicking_arrows_navigates() {
    let mut p = play_list(3, true);
    rendered(&mut p, Rect::new(0, 0, 40, 10));
    let next = p.layout().next.unwrap();
    assert_eq!(
        p.handle_event(InputEvent::Mouse(MouseEvent::click(next.x, next.y))),
        PlayListAction::IndexChanged(1)
    );
    rendered(&mut p, Rect::new(0, 0, 40, 10));
    let prev = p.layout().prev.unwrap();
    p.handle_event(InputEvent::Mouse(MouseEvent::click(prev.x, prev.y)));
    p.handle_event(InputEvent::Mouse(MouseEvent::click(prev.x, prev.y)));
    assert_eq!(p.index(), 2);
}

#[test]
fn disabled_arrow_has_no_hit_area() {
    let mut p = play_list(3, false);
    let buf = rendered(&mut p, Rect::new(0, 0, 40, 10));
    assert!(p.layout().prev.is_none());
    assert!(p.layout().next.is_some());
    // Dimmed, not hidden.
    assert!(row(&buf, 5).contains('‹'));
}

#[test]
fn clicking_the_card_reports_the_slide_position() {
    let mut p = play_list(3, true);
    p.go_to(2);
    rendered(&mut p, Rect::new(0, 0, 40, 10));
    let card = p.layout().card.unwrap();
    let action = p.handle_event(InputEvent::Mouse(MouseEvent::click(card.x + 5, card.y + 2)));
    assert_eq!(action, PlayListAction::None);
    assert_eq!(p.index(), 2);
}

#[test]
fn a_non_current_slide_reporting_through_the_play_list_becomes_current() {
    let mut p = play_list(4, false);
    let slides = p.slides().to_vec();
    slides[2].report_position(&slides, &mut p);
    assert_eq!(p.index(), 2);
    assert_single_active(&p);
}

#[test]
fn go_to_huge_index_wraps_by_its_real_value() {
    let mut p = play_list(3, true);
    p.go_to(usize::MAX);
    assert_eq!(p.index(), usize::MAX % 3);
    assert_single_active(&p);
}

#[test]
fn only_the_active_slide_is_drawn() {
    let mut p = play_list(3, true);
    p.next();
    let buf = rendered(&mut p, Rect::new(0, 0, 40, 10));
    let text: String = (0..10).map(|y| row(&buf, y)).collect();
    assert!(text.contains("Slide title 1"));
    assert!(!text.contains("Slide title 0"));
    assert!(!text.contains("Slide title 2"));
    assert!(text.contains('●'));
    assert_eq!(text.matches('○').count(), 2);
}

#[test]
fn structural_changes_keep_the_invariant() {
    let mut p = play_list(4, true);
    p.last();
    let ids: Vec<_> = p.slides().iter().filter_map(Slide::id).collect();
    p.remove_slide(ids[3]).unwrap();
    assert_eq!(p.index(), 0);
    assert_single_active(&p);

    p.set_wrap(false);
    p.last();
    p.remove_slide(ids[2]).unwrap();
    assert_eq!(p.index(), 1);
    assert_single_active(&p);

    p.insert_slide(0, Slide::new("new", "New first"));
    assert_eq!(p.len(), 3);
    assert_single_active(&p);

    p.clear();
    assert_eq!(p.index(), 0);
    assert!(p.active_slide().is_none());
}
