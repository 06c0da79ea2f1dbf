use super::*;
use crate::core::locale::{Dictionary, Passthrough};
use crate::core::surface::testing::{Op, Recorder};
use alloc::format;
use alloc::rc::Rc;
use alloc::vec;
use core::cell::{Cell, RefCell};

fn ctx(surface: &mut Recorder) -> AppCtx<'_> {
    AppCtx {
        surface,
        locale: &Passthrough,
    }
}

fn numbered(len: usize) -> MenuSpec {
    (0..len).fold(MenuSpec::new(), |spec, i| spec.label(format!("Item {i}")))
}

fn menu(spec: MenuSpec, surface: &Recorder) -> Menu {
    Menu::new(spec, surface, ButtonBar::default())
}

/// Up and down indicators, in that order, with the colour they were drawn in.
fn indicators(surface: &Recorder) -> (Rgb, Rgb) {
    let polys = surface.polys();
    assert_eq!(polys.len(), 2);
    (polys[0].1, polys[1].1)
}

type Rgb = embedded_graphics::pixelcolor::Rgb888;

#[test]
fn layout_reserves_indicator_and_title_space() {
    let surface = Recorder::new();
    let plain = menu(numbered(3), &surface);
    assert_eq!(
        *plain.layout(),
        Layout {
            x: 0,
            x2: 175,
            y: 0,
            y2: 137
        }
    );
    assert_eq!(plain.window().rows, 3);

    let long = menu(numbered(20), &surface);
    // 137 / 21
    assert_eq!(long.window().rows, 6);
    assert_eq!(long.layout().rows_top(), 12);

    let titled = menu(numbered(20).title("Settings"), &surface);
    assert_eq!(titled.layout().y, 22);
    // (137 - 22) / 21
    assert_eq!(titled.window().rows, 5);
}

#[test]
fn window_fills_space_above_down_indicator() {
    for (title, rows) in [(None, 6), (Some("Settings"), 5)] {
        let mut spec = numbered(20);
        if let Some(title) = title {
            spec = spec.title(title);
        }
        let mut surface = Recorder::new();
        let mut m = menu(spec, &surface);
        let layout = *m.layout();
        assert_eq!(m.window().rows, ((layout.y2 - layout.y) / 21) as usize);

        m.draw(&mut ctx(&mut surface));
        let labels = surface.texts().iter().filter(|t| t.starts_with("Item")).count();
        assert_eq!(labels, rows);
    }
}

#[test]
fn cursor_wraps_and_stays_in_bounds() {
    for len in 1..8 {
        let mut surface = Recorder::new();
        let mut m = menu(numbered(len), &surface);
        let mut expected = 0i64;
        for direction in [1, 1, -1, -3, 5, -1, -1, -1, 7, 2, -9] {
            m.move_by(&mut ctx(&mut surface), direction);
            expected = (expected + i64::from(direction)).rem_euclid(len as i64);
            assert_eq!(m.selected() as i64, expected);
            assert!(m.selected() < len);
        }
    }
}

#[test]
fn window_follows_cursor_after_every_draw() {
    let mut surface = Recorder::new();
    let mut m = menu(numbered(20), &surface);
    m.draw(&mut ctx(&mut surface));

    for step in 0..45 {
        let direction = if step % 7 == 6 { -3 } else { 1 };
        m.move_by(&mut ctx(&mut surface), direction);
        let window = m.window();
        assert_eq!(m.previous_window_start(), Some(window.start));
        assert!(window.contains(m.selected()));
        let centred = m.selected().saturating_sub(window.rows / 2).min(20 - window.rows);
        assert_eq!(window.start, centred);
    }
}

#[test]
fn indicators_track_hidden_content() {
    let mut surface = Recorder::new();
    let palette = surface.palette;
    let mut m = menu(numbered(20), &surface);

    m.draw(&mut ctx(&mut surface));
    assert_eq!(indicators(&surface), (palette.bg, palette.fg));

    m.move_by(&mut ctx(&mut surface), 10);
    surface.clear_ops();
    m.draw(&mut ctx(&mut surface));
    assert_eq!(indicators(&surface), (palette.fg, palette.fg));

    m.move_by(&mut ctx(&mut surface), 9);
    surface.clear_ops();
    m.draw(&mut ctx(&mut surface));
    assert_eq!(m.selected(), 19);
    assert_eq!(indicators(&surface), (palette.fg, palette.bg));
}

#[test]
fn short_menu_has_no_indicators() {
    let mut surface = Recorder::new();
    let palette = surface.palette;
    let mut m = menu(numbered(3), &surface);
    m.draw(&mut ctx(&mut surface));
    assert_eq!(indicators(&surface), (palette.bg, palette.bg));
}

#[test]
fn every_draw_flips_once() {
    let mut surface = Recorder::new();
    let mut m = menu(numbered(20), &surface);

    m.draw(&mut ctx(&mut surface));
    assert_eq!(surface.flips(), 1);

    surface.clear_ops();
    m.move_by(&mut ctx(&mut surface), 1);
    assert_eq!(surface.flips(), 1);

    surface.clear_ops();
    m.move_by(&mut ctx(&mut surface), 10);
    assert_eq!(surface.flips(), 1);
}

#[test]
fn move_inside_window_repaints_two_rows() {
    let mut surface = Recorder::new();
    let mut m = menu(numbered(20), &surface);
    m.draw(&mut ctx(&mut surface));
    assert_eq!(surface.texts().len(), 6);

    surface.clear_ops();
    m.move_by(&mut ctx(&mut surface), 1);
    assert_eq!(surface.texts(), ["Item 0", "Item 1"]);
    let palette = surface.palette;
    assert_eq!(surface.color_of("Item 0"), Some(palette.fg));
    assert_eq!(surface.color_of("Item 1"), Some(palette.fg_highlight));
}

#[test]
fn scrolling_forces_full_redraw() {
    let mut surface = Recorder::new();
    let mut m = menu(numbered(20), &surface);
    m.draw(&mut ctx(&mut surface));
    m.move_by(&mut ctx(&mut surface), 3);

    surface.clear_ops();
    // cursor 3 -> 4 shifts the window start from 0 to 1
    m.move_by(&mut ctx(&mut surface), 1);
    assert_eq!(
        surface.texts(),
        ["Item 1", "Item 2", "Item 3", "Item 4", "Item 5", "Item 6"]
    );
}

#[test]
fn first_partial_draw_is_full() {
    let mut surface = Recorder::new();
    let mut m = menu(numbered(4), &surface);
    assert_eq!(m.previous_window_start(), None);
    m.move_by(&mut ctx(&mut surface), 1);
    assert_eq!(surface.texts().len(), 4);
}

#[test]
fn wrap_around_from_top_redraws_window() {
    let mut surface = Recorder::new();
    let mut m = menu(numbered(20), &surface);
    m.draw(&mut ctx(&mut surface));

    surface.clear_ops();
    m.move_by(&mut ctx(&mut surface), -1);
    assert_eq!(m.selected(), 19);
    assert_eq!(m.window().start, 14);
    assert_eq!(surface.texts().len(), 6);
}

#[test]
fn title_only_on_full_redraw() {
    let mut surface = Recorder::new();
    let mut m = menu(numbered(20).title("Settings"), &surface);

    m.draw(&mut ctx(&mut surface));
    assert_eq!(surface.texts()[0], "Settings");
    assert!(
        surface
            .ops
            .contains(&Op::Line(Point::new(0, 20), Point::new(175, 20)))
    );

    surface.clear_ops();
    m.move_by(&mut ctx(&mut surface), 1);
    assert!(!surface.texts().contains(&"Settings"));
}

#[test]
fn predraw_runs_before_rows() {
    let calls = Rc::new(Cell::new(0));
    let seen = calls.clone();
    let mut surface = Recorder::new();
    let mut m = menu(
        numbered(3).predraw(move |_| seen.set(seen.get() + 1)),
        &surface,
    );
    m.draw(&mut ctx(&mut surface));
    m.move_by(&mut ctx(&mut surface), 1);
    assert_eq!(calls.get(), 2);
}

#[test]
fn labels_go_through_locale() {
    let mut dict = Dictionary::default();
    dict.insert("Sound", "Ton");
    let mut surface = Recorder::new();
    let mut m = menu(MenuSpec::new().label("Sound"), &surface);
    m.draw(&mut AppCtx {
        surface: &mut surface,
        locale: &dict,
    });
    assert_eq!(surface.texts(), ["Ton"]);
}

#[test]
fn fields_show_their_value() {
    let mut surface = Recorder::new();
    let mut m = menu(
        MenuSpec::new()
            .number("Brightness", NumberField::new(5.0))
            .toggle("Sound", ToggleField::new(true))
            .action("Back", |_, _| {}),
        &surface,
    );
    m.draw(&mut ctx(&mut surface));
    assert_eq!(surface.texts(), ["Brightness", "5", "Sound", "On", "Back"]);
    assert!(
        surface
            .ops
            .iter()
            .any(|op| matches!(op, Op::Text(t, _, Alignment::Right) if t == "5"))
    );
}

#[test]
fn numeric_select_toggles_edit_mode_only() {
    let mut surface = Recorder::new();
    let mut m = menu(
        MenuSpec::new().number("Level", NumberField::new(3.0).range(0.0, 10.0)),
        &surface,
    );

    for round in 0..4 {
        m.select(&mut ctx(&mut surface));
        assert_eq!(m.is_editing(), round % 2 == 0);
        assert_eq!(m.number("Level"), Some(3.0));
    }
}

#[test]
fn editing_suppresses_highlight_and_shows_caret() {
    let mut surface = Recorder::new();
    let palette = surface.palette;
    let mut m = menu(
        MenuSpec::new().number("Level", NumberField::new(3.0)),
        &surface,
    );

    m.draw(&mut ctx(&mut surface));
    assert_eq!(surface.color_of("Level"), Some(palette.fg_highlight));
    assert_eq!(surface.glyphs(), 0);

    surface.clear_ops();
    m.select(&mut ctx(&mut surface));
    assert_eq!(surface.color_of("Level"), Some(palette.fg));
    assert_eq!(surface.color_of("3"), Some(palette.fg_highlight));
    assert_eq!(surface.glyphs(), 1);
}

#[test]
fn editing_moves_value_and_repaints_one_row() {
    let mut surface = Recorder::new();
    let mut m = menu(
        numbered(3).number("Level", NumberField::new(3.0).range(0.0, 10.0)),
        &surface,
    );
    m.move_by(&mut ctx(&mut surface), -1);
    m.select(&mut ctx(&mut surface));

    surface.clear_ops();
    m.move_by(&mut ctx(&mut surface), 1);
    assert_eq!(m.selected(), 3);
    assert_eq!(m.number("Level"), Some(4.0));
    assert_eq!(surface.texts(), ["Level", "4"]);
    assert_eq!(surface.flips(), 1);
}

#[test]
fn bounded_field_clamps_or_wraps_while_editing() {
    for (wrap, from, direction, expected) in [
        (false, 0.0, -1, 0.0),
        (false, 10.0, 1, 10.0),
        (true, 0.0, -1, 10.0),
        (true, 10.0, 1, 0.0),
    ] {
        let mut surface = Recorder::new();
        let mut m = menu(
            MenuSpec::new().number(
                "Level",
                NumberField::new(from).range(0.0, 10.0).step(1.0).wrap(wrap),
            ),
            &surface,
        );
        m.select(&mut ctx(&mut surface));
        m.move_by(&mut ctx(&mut surface), direction);
        m.move_by(&mut ctx(&mut surface), 0);
        assert_eq!(m.number("Level"), Some(expected), "wrap={wrap} from={from}");
    }
}

#[test]
fn toggle_select_flips_and_reports_once() {
    let seen = Rc::new(RefCell::new(vec![]));
    let sink = seen.clone();
    let mut surface = Recorder::new();
    let mut m = menu(
        MenuSpec::new().toggle(
            "Sound",
            ToggleField::new(true).on_change(move |v| sink.borrow_mut().push(v)),
        ),
        &surface,
    );

    m.select(&mut ctx(&mut surface));
    assert_eq!(m.toggle("Sound"), Some(false));
    assert!(!m.is_editing());
    assert_eq!(*seen.borrow(), [false]);

    m.select(&mut ctx(&mut surface));
    assert_eq!(m.toggle("Sound"), Some(true));
    assert_eq!(*seen.borrow(), [false, true]);
    assert_eq!(surface.flips(), 2);
}

#[test]
fn brightness_and_sound_walkthrough() {
    let changes = Rc::new(RefCell::new(vec![]));
    let sink = changes.clone();
    let mut surface = Recorder::new();
    let mut m = menu(
        MenuSpec::new()
            .number(
                "Brightness",
                NumberField::new(5.0).range(0.0, 10.0).step(1.0),
            )
            .toggle(
                "Sound",
                ToggleField::new(true).on_change(move |v| sink.borrow_mut().push(v)),
            ),
        &surface,
    );
    m.draw(&mut ctx(&mut surface));

    m.select(&mut ctx(&mut surface));
    assert!(m.is_editing());

    m.move_by(&mut ctx(&mut surface), 1);
    assert_eq!(m.number("Brightness"), Some(6.0));
    assert!(m.is_editing());

    m.select(&mut ctx(&mut surface));
    assert!(!m.is_editing());
    assert_eq!(m.number("Brightness"), Some(6.0));

    m.move_by(&mut ctx(&mut surface), 1);
    assert_eq!(m.selected(), 1);

    m.select(&mut ctx(&mut surface));
    assert_eq!(m.toggle("Sound"), Some(false));
    assert_eq!(*changes.borrow(), [false]);
}

#[test]
fn empty_menu_draws_no_rows() {
    let mut surface = Recorder::new();
    let palette = surface.palette;
    let mut m = menu(MenuSpec::new().title("Nothing").selected(4), &surface);
    assert_eq!(m.selected(), 0);
    assert!(m.is_empty());

    m.draw(&mut ctx(&mut surface));
    assert_eq!(surface.texts(), ["Nothing"]);
    assert_eq!(indicators(&surface), (palette.bg, palette.bg));

    m.move_by(&mut ctx(&mut surface), 1);
    m.select(&mut ctx(&mut surface));
    assert_eq!(m.selected(), 0);
}

#[test]
fn out_of_range_selection_is_clamped() {
    let surface = Recorder::new();
    let m = menu(numbered(3).selected(9), &surface);
    assert_eq!(m.selected(), 2);
}

#[test]
fn labels_are_inert() {
    let mut surface = Recorder::new();
    let mut m = menu(numbered(2), &surface);
    m.select(&mut ctx(&mut surface));
    assert!(surface.ops.is_empty());
    assert!(!m.is_editing());
}

#[test]
fn actions_get_the_menu_and_survive_the_call() {
    let calls = Rc::new(Cell::new(0));
    let seen = calls.clone();
    let mut surface = Recorder::new();
    let mut m = menu(
        numbered(3).action("Next", move |menu, ctx| {
            seen.set(seen.get() + 1);
            menu.move_by(ctx, 1);
        }),
        &surface,
    );
    m.move_by(&mut ctx(&mut surface), -1);

    m.select(&mut ctx(&mut surface));
    assert_eq!(m.selected(), 0);
    m.move_by(&mut ctx(&mut surface), -1);
    m.select(&mut ctx(&mut surface));
    assert_eq!(calls.get(), 2);
}

#[test]
fn actions_request_transitions() {
    let mut surface = Recorder::new();
    let mut m = menu(
        MenuSpec::new().action("Open", |menu, _| {
            menu.navigate(Transition::Menu(Some(MenuSpec::new().label("Inner"))));
        }),
        &surface,
    );
    assert!(m.take_transition().is_none());
    m.select(&mut ctx(&mut surface));
    match m.take_transition() {
        Some(Transition::Menu(Some(spec))) => assert_eq!(spec.len(), 1),
        _ => panic!("expected a menu transition"),
    }
    assert!(m.take_transition().is_none());
}

#[test]
fn touches_drive_the_menu() {
    let mut surface = Recorder::new();
    let mut m = menu(
        numbered(3).toggle("Sound", ToggleField::new(false)),
        &surface,
    );
    m.redraw(&mut ctx(&mut surface));

    m.on_touch(&mut ctx(&mut surface), TouchPoint::new(20, 160));
    assert_eq!(m.selected(), 3);
    m.on_touch(&mut ctx(&mut surface), TouchPoint::new(88, 160));
    assert_eq!(m.toggle("Sound"), Some(true));
    m.on_touch(&mut ctx(&mut surface), TouchPoint::new(150, 160));
    assert_eq!(m.selected(), 0);
    m.on_touch(&mut ctx(&mut surface), TouchPoint::new(88, 40));
    assert_eq!(m.selected(), 0);
    assert_eq!(m.buttons().pressed(), None);

    m.on_button(&mut ctx(&mut surface), Button::Up);
    assert_eq!(m.selected(), 3);
}
