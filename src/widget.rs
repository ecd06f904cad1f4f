use std::fmt::Display;
use std::hash::Hash;

use egui::{Align, Align2, Button, Color32, FontId, Id, Layout, Rect, Response, Sense, Stroke, Ui};

use crate::scroll::ScrollAnimation;
use crate::{Axis, CarouselConfig, CarouselState, DragDropResponse, DragDropUi};

/// Width of the strip along each side of the viewport that scrolls it while a card is dragged.
const EDGE_BAND: f32 = 60.0;
/// Edge scrolling speed in points per second.
const EDGE_SCROLL_SPEED: f32 = 900.0;

/// What happened to the carousel during one frame.
#[derive(Debug, Clone)]
pub struct CarouselResponse {
    pub drag: DragDropResponse,
    /// The items were reordered by a drop.
    pub reordered: bool,
    /// The current index changed through the Next / Previous buttons.
    pub navigated: bool,
    /// Visible part of the scrolling row.
    pub viewport: Rect,
    /// Horizontal scroll offset of the viewport at the end of the frame.
    pub scroll_offset: f32,
    pub next_button: Response,
    pub previous_button: Response,
}

impl CarouselResponse {
    pub fn changed(&self) -> bool {
        self.reordered || self.navigated
    }
}

/// A row of draggable cards inside a horizontally scrolling viewport, followed by Next and
/// Previous buttons. The viewport scrolls to center the current card whenever the
/// [`CarouselState`] commits a change.
///
/// # Example
/// ```rust,no_run
/// use eframe::egui::{CentralPanel, Context};
/// use eframe::{App, Frame};
/// use egui_carousel::{Carousel, CarouselConfig, CarouselState};
///
/// struct CarouselApp {
///     config: CarouselConfig,
///     state: CarouselState<String>,
/// }
///
/// impl App for CarouselApp {
///     fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
///         CentralPanel::default().show(ctx, |ui| {
///             Carousel::new("cards")
///                 .config(self.config.clone())
///                 .show_labels(ui, &mut self.state);
///         });
///     }
/// }
///
/// pub fn main() {
///     let config = CarouselConfig::default();
///     let items = vec!["A", "B", "C"].into_iter().map(|s| s.to_string()).collect();
///     let state = CarouselState::new(items, config.stride());
///     eframe::run_native(
///         "Carousel Example",
///         eframe::NativeOptions::default(),
///         Box::new(|_| Box::new(CarouselApp { config, state })),
///     );
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Carousel {
    id: Id,
    config: CarouselConfig,
}

impl Carousel {
    pub fn new(id_source: impl Hash) -> Self {
        Self {
            id: Id::new(id_source),
            config: CarouselConfig::default(),
        }
    }

    pub fn config(mut self, config: CarouselConfig) -> Self {
        self.config = config;
        self
    }

    /// The one id of the viewport. The drop target wiring and the scroll animation both key
    /// their state off it.
    pub fn viewport_id(&self) -> Id {
        self.id.with("viewport")
    }

    /// Show the carousel with each card painted as its item's label.
    pub fn show_labels<T: Hash + Display>(
        self,
        ui: &mut Ui,
        state: &mut CarouselState<T>,
    ) -> CarouselResponse {
        let config = self.config.clone();
        self.show(ui, state, |ui, item, is_current| {
            paint_card(ui, &config, &item.to_string(), is_current)
        })
    }

    /// Show the carousel. `card_ui` draws the body of a card, its arguments are the ui, the item
    /// and whether the item is the current one. The card is draggable by its whole body.
    pub fn show<T: Hash>(
        self,
        ui: &mut Ui,
        state: &mut CarouselState<T>,
        mut card_ui: impl FnMut(&mut Ui, &T, bool),
    ) -> CarouselResponse {
        let config = &self.config;
        let viewport_id = self.viewport_id();
        state.set_stride(config.stride());

        let mut dnd = ui.data().get_temp::<DragDropUi>(viewport_id).unwrap_or_else(|| {
            DragDropUi::new(viewport_id)
                .with_axis(Axis::Horizontal)
                .with_list_margin(0.0)
                .with_background(false)
        });

        let memory_id = viewport_id.with("memory");
        let mut memory = ui.data().get_temp::<ViewportMemory>(memory_id).unwrap_or_default();
        let scroll_offset = if dnd.drag_indices().is_some() {
            memory.animation = None;
            edge_scroll(ui, &memory)
        } else {
            self.animate(ui, state, &mut memory)
        };
        dnd.set_drop_area(memory.rect);
        let current_index = state.current_index();

        let output = ui
            .vertical_centered(|ui| {
                egui::Frame::none()
                    .fill(config.viewport_fill())
                    .show(ui, |ui| {
                        let size = config.viewport_size();
                        ui.set_width(size.x);
                        ui.set_height(size.y);

                        let mut scroll_area = egui::ScrollArea::horizontal()
                            .id_source(viewport_id)
                            .auto_shrink([false, false]);
                        if let Some(offset) = scroll_offset {
                            scroll_area = scroll_area.horizontal_scroll_offset(offset);
                        }
                        scroll_area
                            .show(ui, |ui| {
                                ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                    ui.spacing_mut().item_spacing.x = 0.0;
                                    ui.add_space(config.buffer_width());
                                    let drag = dnd.ui(
                                        ui,
                                        state.items().iter(),
                                        |ui, handle, idx, item| {
                                            ui.add_space(config.card_margin);
                                            handle.ui(ui, |ui| {
                                                card_ui(ui, item, idx == current_index)
                                            });
                                            ui.add_space(config.card_margin);
                                        },
                                    );
                                    ui.add_space(config.buffer_width());
                                    drag
                                })
                                .inner
                            })
                    })
                    .inner
            })
            .inner;
        memory.offset = output.state.offset.x;
        memory.rect = Some(output.inner_rect);
        memory.max_offset = (output.content_size.x - output.inner_rect.width()).max(0.0);
        ui.data().insert_temp(memory_id, memory);
        ui.data().insert_temp(viewport_id, dnd);

        let drag = output.inner;

        let reordered = drag
            .completed()
            .map(|result| state.reorder(result))
            .unwrap_or(false);

        let (next_button, previous_button) = ui
            .vertical_centered(|ui| {
                let next = ui.add_enabled(state.has_next(), Button::new("Next"));
                let previous = ui.add_enabled(state.has_previous(), Button::new("Previous"));
                (next, previous)
            })
            .inner;
        let navigated = (next_button.clicked() && state.next())
            | (previous_button.clicked() && state.previous());

        CarouselResponse {
            drag,
            reordered,
            navigated,
            viewport: output.inner_rect,
            scroll_offset: output.state.offset.x,
            next_button,
            previous_button,
        }
    }

    /// Offset to force on the viewport this frame, `None` once it has settled on the latest
    /// commit so the user can scroll freely.
    fn animate<T>(
        &self,
        ui: &Ui,
        state: &CarouselState<T>,
        memory: &mut ViewportMemory,
    ) -> Option<f32> {
        let scroll = state.scroll();
        let time = ui.input().time;
        if memory.generation != Some(scroll.generation()) {
            memory.generation = Some(scroll.generation());
            memory.animation = Some(ScrollAnimation::new(
                memory.offset,
                scroll.target_offset(),
                time,
            ));
        }

        let animation = memory.animation?;
        let (offset, done) = animation.offset_at(time, self.config.scroll_animation_time);
        if done {
            memory.animation = None;
        } else {
            ui.ctx().request_repaint();
        }
        Some(offset)
    }
}

/// What the viewport remembers between frames.
#[derive(Clone, Debug, Default)]
struct ViewportMemory {
    /// Scroll offset at the end of the last frame.
    offset: f32,
    rect: Option<Rect>,
    max_offset: f32,
    /// Last commit an animation was started for.
    generation: Option<u64>,
    animation: Option<ScrollAnimation>,
}

/// Scroll toward the edge of the viewport the pointer is close to. Only called while a card is
/// being dragged, so cards outside the view can still be reached.
fn edge_scroll(ui: &Ui, memory: &ViewportMemory) -> Option<f32> {
    let rect = memory.rect?;
    let pointer = ui.input().pointer.hover_pos()?;
    if !rect.contains(pointer) {
        return None;
    }

    let band = EDGE_BAND.min(rect.width() / 4.0);
    let direction = if pointer.x < rect.left() + band {
        -1.0
    } else if pointer.x > rect.right() - band {
        1.0
    } else {
        return None;
    };
    let dt = ui.input().stable_dt.min(0.1);
    let offset =
        (memory.offset + direction * EDGE_SCROLL_SPEED * dt).clamp(0.0, memory.max_offset);
    ui.ctx().request_repaint();
    Some(offset)
}

/// Paint a plain card: a filled rect with a centered label, outlined when current.
pub fn paint_card(ui: &mut Ui, config: &CarouselConfig, label: &str, is_current: bool) {
    let (rect, _response) = ui.allocate_exact_size(config.card_size(), Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, config.card_fill());
    if is_current {
        painter.rect_stroke(rect, 0.0, Stroke::new(3.0, Color32::WHITE));
    }
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        label,
        FontId::proportional(config.label_size),
        Color32::WHITE,
    );
}
