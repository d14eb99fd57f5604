use std::cell::RefCell;
use std::rc::Rc;

use food_tracker_rs::control::{RatingControl, StarSize, StarStyle};

fn control_with_rating(star_count: usize, rating: u32) -> (RatingControl, Rc<RefCell<Vec<u32>>>) {
    let mut control = RatingControl::with_config(star_count, StarSize::default());
    control.set_rating(rating);

    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    control.set_on_change_listener(move |r: u32| sink.borrow_mut().push(r));

    (control, calls)
}

#[test]
fn test_configure_builds_exact_star_count() {
    for star_count in 0..=12 {
        let control = RatingControl::with_config(star_count, StarSize::default());
        assert_eq!(control.stars().len(), star_count);
        assert!(control.stars().iter().all(|s| !s.is_selected()));
    }
}

#[test]
fn test_selection_follows_rating() {
    let mut control = RatingControl::with_config(5, StarSize::default());

    for rating in 0..=5u32 {
        control.set_rating(rating);
        for (i, star) in control.stars().iter().enumerate() {
            assert_eq!(
                star.is_selected(),
                i < rating as usize,
                "star {} with rating {}",
                i,
                rating
            );
        }
    }
}

#[test]
fn test_toggle_off_example() {
    let (mut control, calls) = control_with_rating(5, 3);
    control.tap_star(3).unwrap();

    assert_eq!(control.rating(), 0);
    assert_eq!(*calls.borrow(), vec![0]);
}

#[test]
fn test_tap_other_star_example() {
    let (mut control, calls) = control_with_rating(5, 2);
    control.tap_star(4).unwrap();

    assert_eq!(control.rating(), 4);
    assert_eq!(*calls.borrow(), vec![4]);
}

#[test]
fn test_each_tap_notifies_once() {
    let (mut control, calls) = control_with_rating(5, 0);

    for position in [1, 1, 5, 2, 2, 3] {
        control.tap_star(position).unwrap();
    }

    assert_eq!(*calls.borrow(), vec![1, 0, 5, 2, 0, 3]);
}

#[test]
fn test_reconfigure_discards_old_stars() {
    let (mut control, calls) = control_with_rating(5, 4);
    let old_ids: Vec<_> = control.stars().iter().map(|s| s.id()).collect();

    control.configure(3, StarSize::new(30.0, 30.0));
    assert_eq!(control.stars().len(), 3);
    assert_eq!(control.rating(), 4);
    assert!(calls.borrow().is_empty());

    for id in old_ids {
        assert!(control.tap(id).is_err());
    }
    assert_eq!(control.rating(), 4);
}

#[test]
fn test_star_from_another_control_is_rejected() {
    let other = RatingControl::with_config(5, StarSize::default());
    let (mut control, calls) = control_with_rating(5, 1);

    for star in other.stars() {
        assert!(control.tap(star.id()).is_err());
    }
    assert_eq!(control.rating(), 1);
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_style_renders_after_tap() {
    let (mut control, _) = control_with_rating(5, 0);
    let style = StarStyle::new("x", "o");

    control.tap_star(2).unwrap();
    assert_eq!(style.render(&control), "x x o o o");
}
