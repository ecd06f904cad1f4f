use egui::{
    CentralPanel, Context, Event, Modifiers, PointerButton, Pos2, RawInput, Rect, Sense, Vec2,
};
use egui_carousel::{utils::move_item, DragDropResponse, DragDropUi};

/// A plain vertical list, the way `DragDropUi` is used outside of the carousel.
struct List {
    ctx: Context,
    dnd: DragDropUi,
    items: Vec<String>,
    rects: Vec<(String, Rect)>,
}

impl List {
    fn new() -> Self {
        Self {
            ctx: Context::default(),
            dnd: DragDropUi::default(),
            items: ["a", "b", "c"].iter().map(|s| s.to_string()).collect(),
            rects: Vec::new(),
        }
    }

    fn frame(&mut self, events: Vec<Event>) -> DragDropResponse {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0))),
            events,
            ..Default::default()
        };

        let mut response = None;
        let mut rects = Vec::new();
        let dnd = &mut self.dnd;
        let items = &self.items;
        let _ = self.ctx.run(input, |ctx| {
            CentralPanel::default().show(ctx, |ui| {
                response = Some(dnd.ui(ui, items.iter(), |ui, handle, _idx, item| {
                    let row = handle.ui(ui, |ui| {
                        ui.allocate_exact_size(Vec2::new(200.0, 40.0), Sense::hover());
                    });
                    rects.push((item.clone(), row.rect));
                }));
            });
        });
        self.rects = rects;

        let response = response.expect("list was shown");
        if let Some(result) = response.completed() {
            if let Some(destination) = result.destination {
                move_item(result.source, destination, &mut self.items);
            }
        }
        response
    }

    fn center(&self, label: &str) -> Pos2 {
        self.rects
            .iter()
            .find(|(item, _)| item == label)
            .map(|(_, rect)| rect.center())
            .expect("row was drawn")
    }

    fn drag(&mut self, from: Pos2, to: Pos2) -> DragDropResponse {
        self.frame(vec![Event::PointerMoved(from)]);
        assert!(self.frame(vec![press(from, true)]).is_dragging());
        assert!(self.frame(vec![Event::PointerMoved(to)]).is_dragging());
        self.frame(vec![press(to, false)])
    }
}

fn press(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::default(),
    }
}

#[test]
fn rows_are_stacked_top_down() {
    let mut list = List::new();
    list.frame(Vec::new());

    let a = list.center("a");
    let b = list.center("b");
    let c = list.center("c");
    assert!(a.y < b.y && b.y < c.y);
    assert!((a.x - b.x).abs() < 0.5 && (b.x - c.x).abs() < 0.5);
}

#[test]
fn dragging_top_row_below_the_last_moves_it_down() {
    let mut list = List::new();
    list.frame(Vec::new());

    let from = list.center("a");
    let to = list.center("c") + Vec2::new(0.0, 10.0);
    let response = list.drag(from, to);

    assert_eq!(
        response.completed().and_then(|result| result.destination),
        Some(2)
    );
    assert_eq!(list.items, ["b", "c", "a"]);
    assert!(!list.frame(Vec::new()).is_dragging());
}

#[test]
fn dragging_bottom_row_above_the_first_moves_it_up() {
    let mut list = List::new();
    list.frame(Vec::new());

    let from = list.center("c");
    let to = list.center("a") - Vec2::new(0.0, 10.0);
    let response = list.drag(from, to);

    assert_eq!(
        response.completed().and_then(|result| result.destination),
        Some(0)
    );
    assert_eq!(list.items, ["c", "a", "b"]);
}

#[test]
fn releasing_outside_the_list_cancels() {
    let mut list = List::new();
    list.frame(Vec::new());

    let from = list.center("b");
    let response = list.drag(from, Pos2::new(from.x, 500.0));

    assert_eq!(
        response.completed().map(|result| result.destination),
        Some(None)
    );
    assert_eq!(list.items, ["a", "b", "c"]);
}
