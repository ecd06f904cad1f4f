use egui::{self, Align, CursorIcon, Id, Layout, Order, Pos2, Rect, Sense, Shape, Ui, Vec2};
use std::hash::Hash;

use crate::utils::{drop_slot, move_item};
use crate::Handle;

pub trait DragDropItem {
    fn id(&self) -> Id;
}

impl<T: Hash> DragDropItem for T {
    fn id(&self) -> Id {
        Id::new(self)
    }
}

/// Direction the list is laid out in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

impl Axis {
    /// Coordinate of `pos` along this axis.
    pub fn main(self, pos: Pos2) -> f32 {
        match self {
            Axis::Vertical => pos.y,
            Axis::Horizontal => pos.x,
        }
    }

    fn layout(self) -> Layout {
        match self {
            Axis::Vertical => Layout::top_down(Align::Min),
            Axis::Horizontal => Layout::left_to_right(Align::Center),
        }
    }
}

/// Live positions of a drag in progress. `target` is the position the dragged item would end up
/// at if it were dropped now.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DragIndices {
    pub source: usize,
    pub target: usize,
}

/// Outcome of a finished drag. `destination` is `None` when the item was released outside of the
/// list, otherwise it's the final position of the item (see [`crate::utils::move_item`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropResult {
    pub source: usize,
    pub destination: Option<usize>,
}

/// DragDropResponse containing the potential list updates during and after a drag & drop event
/// `CurrentDrag` is returned when something is being dragged right now and can be used update
/// some state while the drag is in progress.
/// `Completed` is returned once when the item is released. It should be used to update positions
/// of the affected items. If the source is a vec, [move_item] can be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragDropResponse {
    NoDrag,
    CurrentDrag(DragIndices),
    Completed(DropResult),
}

impl DragDropResponse {
    pub fn completed(&self) -> Option<DropResult> {
        match self {
            DragDropResponse::Completed(result) => Some(*result),
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragDropResponse::CurrentDrag(_))
    }
}

/// [DragDropUi] stores the state of the Drag & Drop list.
#[derive(Clone, Debug)]
pub struct DragDropUi {
    id: Id,
    axis: Axis,
    list_margin: f32,
    background: bool,
    drop_area: Option<Rect>,
    drag_indices: Option<DragIndices>,
    /// Offset from the pointer to the origin of the dragged widget when dragging began
    pub(crate) drag_delta: Option<Vec2>,
    /// Size of the dragged widget when dragging began
    pub(crate) drag_size: Option<Vec2>,
}

impl Default for DragDropUi {
    fn default() -> Self {
        Self::new("drag_drop_ui")
    }
}

impl DragDropUi {
    /// `id_source` keeps the item ids of different lists apart.
    pub fn new(id_source: impl Hash) -> Self {
        Self {
            id: Id::new(id_source),
            axis: Axis::default(),
            list_margin: 4.0,
            background: true,
            drop_area: None,
            drag_indices: None,
            drag_delta: None,
            drag_size: None,
        }
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Space between the list background and the items.
    pub fn with_list_margin(mut self, margin: f32) -> Self {
        self.list_margin = margin;
        self
    }

    /// Whether to paint the list background (highlighted while it's the drop target).
    pub fn with_background(mut self, background: bool) -> Self {
        self.background = background;
        self
    }

    /// Extra region that accepts drops, besides the list itself. A scrolling container passes
    /// its viewport here so that releasing over its padding still counts as a drop.
    pub fn set_drop_area(&mut self, drop_area: Option<Rect>) {
        self.drop_area = drop_area;
    }

    pub fn drag_indices(&self) -> Option<DragIndices> {
        self.drag_indices
    }

    /// Draw the list. `item_ui` draws the ui elements for each item in `items`. Its arguments are:
    /// - a mutable reference to the ui
    /// - a `Handle` that can be used to draw the draggable part of the item ui
    /// - the index of the current item in the `items` list
    /// - a reference to the current item in the `items` list
    pub fn ui<'a, T: DragDropItem + 'a>(
        &mut self,
        ui: &mut Ui,
        items: impl Iterator<Item = &'a T>,
        mut item_ui: impl FnMut(&mut Ui, Handle, usize, &T),
    ) -> DragDropResponse {
        // internal list representation shifted according to previous hover state
        let mut list = items.enumerate().collect::<Vec<_>>();
        if let Some(drag_indices) = self.drag_indices {
            move_item(drag_indices.source, drag_indices.target, &mut list);
        }
        let mut item_rects = Vec::with_capacity(list.len());
        let mut dragged_this_frame = false;

        // draw list entries
        let layout = self.axis.layout();
        let margin = self.list_margin;
        let background = self.background;
        let is_drop_target = self.drag_indices.is_some();
        let list_rect = DragDropUi::draw_list(ui, layout, margin, background, is_drop_target, |ui| {
            list.iter().for_each(|(idx, item)| {
                let id = self.id.with(DragDropItem::id(*item));
                // get rect of list entry
                let rect = self.draw_item(ui, id, |ui, handle| {
                    item_ui(ui, handle, *idx, item);
                });
                item_rects.push((*idx, rect));

                // check if this entry is being dragged
                if ui.memory().is_being_dragged(id) {
                    self.set_source_index(*idx);
                    dragged_this_frame = true;
                }
            });
        });

        let Some(mut drag_indices) = self.drag_indices else {
            return DragDropResponse::NoDrag;
        };
        if !dragged_this_frame {
            // the dragged item vanished without a release (e.g. the list changed underneath)
            tracing::trace!(source = drag_indices.source, "drag lost its item");
            self.reset_drag();
            return DragDropResponse::NoDrag;
        }

        // determine target index
        let (pointer_pos, released) = {
            let input = ui.input();
            (input.pointer.interact_pos(), input.pointer.any_released())
        };
        if let Some(center) = pointer_pos.and_then(|pos| self.dragged_center(pos)) {
            let others = item_rects
                .iter()
                .filter(|(idx, _)| *idx != drag_indices.source)
                .map(|(_, rect)| self.axis.main(rect.center()));
            drag_indices.target = drop_slot(center, others);
            self.drag_indices = Some(drag_indices);
        }

        // dragging finished
        if released {
            let over_list = pointer_pos
                .map(|pos| {
                    ui.clip_rect().intersect(list_rect).contains(pos)
                        || self.drop_area.map_or(false, |area| area.contains(pos))
                })
                .unwrap_or(false);
            let result = DropResult {
                source: drag_indices.source,
                destination: over_list.then_some(drag_indices.target),
            };
            self.reset_drag();
            tracing::debug!(?result, "drag completed");
            return DragDropResponse::Completed(result);
        }

        // dragging in progress
        tracing::trace!(?drag_indices, "dragging");
        DragDropResponse::CurrentDrag(drag_indices)
    }

    /// Draw the widget for an item using `item_body` either inline with the list or hovering depending
    /// on if its being dragged, then returns its rect. If the item is being dragged, a disabled
    /// placeholder is drawn in its place in the list.
    fn draw_item(&mut self, ui: &mut Ui, id: Id, mut item_body: impl FnMut(&mut Ui, Handle)) -> Rect {
        let is_being_dragged = ui.memory().is_being_dragged(id);

        if !is_being_dragged {
            // not dragged -> draw widget to ui
            let scope = ui.scope(|ui| {
                item_body(
                    ui,
                    Handle {
                        state: self,
                        id,
                        placeholder: false,
                    },
                )
            });
            return scope.response.rect;
        }

        // Now we move the visuals of the body to where the mouse is.
        // A dragged component cannot be interacted with anyway
        // (anything with `Order::Tooltip` always gets an empty [`Response`])
        let pointer_pos = ui
            .ctx()
            .pointer_interact_pos()
            .unwrap_or(ui.next_widget_position());

        // draw hovering item at pointer position
        egui::Area::new(id.with("dragged"))
            .order(Order::Tooltip)
            .interactable(false)
            .fixed_pos(pointer_pos + self.drag_delta.unwrap_or_default())
            .show(ui.ctx(), |ui| {
                item_body(
                    ui,
                    Handle {
                        state: self,
                        id,
                        placeholder: false,
                    },
                )
            });
        ui.output().cursor_icon = CursorIcon::Grabbing;

        // disabled placeholder where the item will land
        let scope = ui.scope(|ui| {
            ui.add_enabled_ui(false, |ui| {
                item_body(
                    ui,
                    Handle {
                        state: self,
                        id,
                        placeholder: true,
                    },
                )
            });
        });
        scope.response.rect
    }

    /// Draw the list body and its background, returns the rect covered by the list.
    fn draw_list(
        ui: &mut Ui,
        layout: Layout,
        margin: f32,
        background: bool,
        is_drop_target: bool,
        list_body: impl FnOnce(&mut Ui),
    ) -> Rect {
        let margin = Vec2::splat(margin);

        let outer_rect_bounds = ui.available_rect_before_wrap();
        let inner_rect = outer_rect_bounds.shrink2(margin);
        let where_to_put_background = ui.painter().add(Shape::Noop);

        let mut content_ui = ui.child_ui(inner_rect, layout);

        list_body(&mut content_ui);
        let outer_rect =
            Rect::from_min_max(outer_rect_bounds.min, content_ui.min_rect().max + margin);
        let (rect, _response) = ui.allocate_at_least(outer_rect.size(), Sense::hover());

        if background {
            // determine list coloring depending on wherever this list is currently the drop target
            let style = if is_drop_target && ui.rect_contains_pointer(rect) {
                ui.visuals().widgets.active
            } else {
                ui.visuals().widgets.inactive
            };

            ui.painter().set(
                where_to_put_background,
                epaint::RectShape {
                    rounding: style.rounding,
                    fill: style.bg_fill,
                    stroke: style.bg_stroke,
                    rect,
                },
            );
        }

        rect
    }

    /// Center of the dragged widget along the list axis, given the current pointer position.
    fn dragged_center(&self, pointer_pos: Pos2) -> Option<f32> {
        let delta = self.drag_delta?;
        let size = self.drag_size.unwrap_or_default();
        Some(self.axis.main(pointer_pos + delta + size / 2.0))
    }

    fn set_source_index(&mut self, source_idx: usize) {
        match &mut self.drag_indices {
            Some(drag_indices) => {
                drag_indices.source = source_idx;
            }
            None => {
                tracing::trace!(source = source_idx, "drag started");
                self.drag_indices = Some(DragIndices {
                    source: source_idx,
                    target: source_idx,
                })
            }
        };
    }

    fn reset_drag(&mut self) {
        self.drag_indices = None;
        self.drag_delta = None;
        self.drag_size = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_picks_coordinate() {
        let pos = Pos2::new(3.0, 7.0);
        assert_eq!(Axis::Horizontal.main(pos), 3.0);
        assert_eq!(Axis::Vertical.main(pos), 7.0);
    }

    #[test]
    fn dragged_center_uses_delta_and_size() {
        let mut dnd = DragDropUi::new("list").with_axis(Axis::Horizontal);
        assert_eq!(dnd.dragged_center(Pos2::new(50.0, 0.0)), None);

        dnd.drag_delta = Some(Vec2::new(-20.0, -10.0));
        dnd.drag_size = Some(Vec2::new(300.0, 150.0));
        assert_eq!(dnd.dragged_center(Pos2::new(50.0, 0.0)), Some(180.0));
    }

    #[test]
    fn source_index_starts_drag_at_its_own_slot() {
        let mut dnd = DragDropUi::default();
        dnd.set_source_index(2);
        assert_eq!(
            dnd.drag_indices(),
            Some(DragIndices {
                source: 2,
                target: 2
            })
        );
        dnd.reset_drag();
        assert_eq!(dnd.drag_indices(), None);
    }

    #[test]
    fn completed_response_exposes_result() {
        let result = DropResult {
            source: 0,
            destination: None,
        };
        assert_eq!(DragDropResponse::Completed(result).completed(), Some(result));
        assert_eq!(DragDropResponse::NoDrag.completed(), None);
        assert!(DragDropResponse::CurrentDrag(DragIndices::default()).is_dragging());
    }
}
