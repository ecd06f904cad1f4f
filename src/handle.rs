use crate::DragDropUi;
use egui::{self, CursorIcon, Id, Pos2, Sense, Ui};

/// [Handle::ui] is used to draw the drag handle
pub struct Handle<'a> {
    pub(crate) state: &'a mut DragDropUi,
    pub(crate) id: Id,
    pub(crate) placeholder: bool,
}

/// The part of the item ui thats draggable. Accessible by the user with the `item_ui` parameter of [`DragDropUi::ui`]
impl<'a> Handle<'a> {
    pub fn ui(self, ui: &mut Ui, contents: impl FnOnce(&mut Ui)) -> egui::Response {
        if self.placeholder {
            // if this is meant to be a placeholder ui, dont do the draggable stuff.
            return ui.scope(contents).response;
        }

        // add contents to ui
        let added_contents = ui.scope(contents);
        let rect = added_contents.response.rect;
        let draggable_response = ui.interact(rect, self.id, Sense::drag());

        // if pointer hovering above this widget, update pointer icon
        if draggable_response.hovered() {
            ui.output().cursor_icon = CursorIcon::Grab;
        }

        // if dragging this widget just began, store the intial pointer position relative to the widget origin
        if draggable_response.drag_started() {
            let pointer_pos = draggable_response
                .interact_pointer_pos()
                .unwrap_or(Pos2::default());
            self.state.drag_delta = Some(rect.min - pointer_pos);
            self.state.drag_size = Some(rect.size());
        }

        draggable_response
    }
}
