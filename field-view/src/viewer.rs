//! Interactive particle field viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns both simulated fields
//! (the pointer-reactive hero background and the contact node
//! network), the typewriter effect, and the localized content, and
//! implements [`eframe::App`] to render everything each frame.

use eframe::App;
use field_core::{
    config::FieldConfig,
    field::Field,
    links::collect_links,
    step,
    typewriter::Typewriter,
};
use glam::Vec2;

use crate::content::ContentBook;

/// Per-field drawing parameters: body fill palette and link stroke.
///
/// The core keeps bodies color-agnostic (a `tint` palette index);
/// this is where indices turn into actual colors.
#[derive(Clone, Copy, Debug)]
pub struct FieldStyle {
    pub fills: &'static [egui::Color32],
    pub link_rgb: (u8, u8, u8),
    pub link_width: f32,
}

const HERO_FILLS: &[egui::Color32] = &[
    egui::Color32::from_rgb(46, 92, 255),
    egui::Color32::from_rgb(112, 0, 255),
];

const CONTACT_FILLS: &[egui::Color32] = &[egui::Color32::from_rgb(0, 240, 255)];

impl FieldStyle {
    pub fn hero() -> Self {
        Self {
            fills: HERO_FILLS,
            link_rgb: (46, 92, 255),
            link_width: 0.5,
        }
    }

    pub fn contact() -> Self {
        Self {
            fills: CONTACT_FILLS,
            link_rgb: (0, 240, 255),
            link_width: 0.2,
        }
    }

    fn fill(&self, tint: u8) -> egui::Color32 {
        self.fills[usize::from(tint) % self.fills.len()]
    }

    /// Link stroke with the given opacity, fully opaque at `1.0`.
    fn link_stroke(&self, alpha: f32) -> egui::Stroke {
        let (r, g, b) = self.link_rgb;
        let a = (alpha.clamp(0.0, 1.0) * 255.0) as u8;
        egui::Stroke::new(
            self.link_width,
            egui::Color32::from_rgba_unmultiplied(r, g, b, a),
        )
    }
}

/// One simulated field bound to a rectangle of the UI.
///
/// `sync_surface` is the resize reactor: whenever the observed
/// rectangle size differs from the field's surface, the field is
/// rebuilt in one swap, so the per-frame step never sees a partially
/// rebuilt body collection. The field starts empty and builds lazily
/// on the first observed rectangle.
pub struct FieldView {
    pub field: Field,
    pub cfg: FieldConfig,
    pub style: FieldStyle,
}

impl FieldView {
    pub fn new(cfg: FieldConfig, style: FieldStyle) -> Self {
        Self {
            field: Field {
                bodies: Vec::new(),
                surface: Vec2::ZERO,
            },
            cfg,
            style,
        }
    }

    /// Rebuilds the field if the drawing surface changed size.
    pub fn sync_surface(&mut self, size: Vec2, rng: &mut impl rand::Rng) {
        if size != self.field.surface {
            self.field.rebuild(size, &self.cfg, rng);
        }
    }

    /// Advances every body by one tick. `pointer` is in surface
    /// coordinates and is ignored by fields without pointer influence.
    pub fn advance(&mut self, pointer: Option<Vec2>) {
        step::step(&mut self.field, pointer, &self.cfg);
    }

    /// Draws bodies and proximity links into `painter`, with field
    /// coordinates offset by `origin`.
    fn paint(&self, painter: &egui::Painter, origin: egui::Pos2) {
        let to_screen = |p: Vec2| egui::pos2(origin.x + p.x, origin.y + p.y);

        for body in &self.field.bodies {
            painter.circle_filled(to_screen(body.pos), body.radius, self.style.fill(body.tint));
        }

        for link in collect_links(&self.field.bodies, self.cfg.link_radius) {
            let a = to_screen(self.field.bodies[link.a].pos);
            let b = to_screen(self.field.bodies[link.b].pos);
            painter.line_segment([a, b], self.style.link_stroke(link.alpha));
        }
    }
}

/// Main application state for the viewer.
///
/// [`Viewer`] glues together:
/// - Two [`FieldView`]s: the hero background (central panel, pointer
///   reactive) and the contact network (bottom panel).
/// - The [`Typewriter`] effect and its single pending deadline.
/// - The localized [`ContentBook`] and the selected language.
///
/// The typical per-frame update is:
/// 1. Build the top bar (company name, language selector).
/// 2. Tick the typewriter if its deadline passed.
/// 3. For each field: sync the surface to the panel rectangle, step,
///    and paint bodies plus links.
/// 4. Request a repaint — the animation runs for the app's lifetime.
pub struct Viewer {
    hero: FieldView,
    contact: FieldView,

    rng: rand::rngs::ThreadRng,

    content: ContentBook,
    lang: String,

    typewriter: Typewriter,
    /// egui time at which the next typewriter tick is due.
    next_type_tick: f64,

    /// Last known pointer position in screen coordinates. `None`
    /// until the first pointer event, then retained — the hero field
    /// keeps reacting to the stale coordinate after the cursor
    /// leaves the window.
    last_pointer: Option<Vec2>,
}

impl Viewer {
    pub fn new() -> Self {
        let content = ContentBook::load();
        let lang = content.resolve_lang("en").unwrap_or("en").to_string();
        let typewriter = Typewriter::new(Self::phrases(&content, &lang));

        Self {
            hero: FieldView::new(FieldConfig::hero(), FieldStyle::hero()),
            contact: FieldView::new(FieldConfig::contact(), FieldStyle::contact()),
            rng: rand::rng(),
            content,
            lang,
            typewriter,
            next_type_tick: 0.0,
            last_pointer: None,
        }
    }

    /// Records the latest pointer position. egui reports `None` once
    /// the cursor leaves the window; the previous coordinate is kept
    /// in that case, so only an actual pointer event updates it.
    fn remember_pointer(&mut self, latest: Option<egui::Pos2>) {
        if let Some(p) = latest {
            self.last_pointer = Some(Vec2::new(p.x, p.y));
        }
    }

    fn phrases(content: &ContentBook, lang: &str) -> Vec<String> {
        content
            .get(lang)
            .map(|c| c.company.subheadline.clone())
            .unwrap_or_default()
    }

    /// Switches the displayed language and restarts the typewriter.
    ///
    /// Replacing the [`Typewriter`] value and zeroing its deadline is
    /// the cancellation path: the previous run's pending tick can
    /// never fire again, so no stale text mutation interleaves with
    /// the new sequence.
    fn set_language(&mut self, lang: &str) {
        if lang == self.lang {
            return;
        }
        let Some(resolved) = self.content.resolve_lang(lang) else {
            return;
        };
        // Unknown codes resolve to the fallback; if that is what is
        // already showing, leave the running typewriter alone.
        if resolved == self.lang {
            return;
        }
        self.lang = resolved.to_string();
        self.typewriter = Typewriter::new(Self::phrases(&self.content, &self.lang));
        self.next_type_tick = 0.0;
    }

    /// Ticks the typewriter when its deadline has passed and
    /// schedules the next one.
    fn drive_typewriter(&mut self, now: f64) {
        if now >= self.next_type_tick {
            self.typewriter.tick();
            self.next_type_tick = now + self.typewriter.delay().as_secs_f64();
        }
    }

    /// Builds the top bar: company name plus the language selector.
    fn ui_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let name = self
                    .content
                    .get(&self.lang)
                    .map(|c| c.company.name.as_str())
                    .unwrap_or("");
                ui.heading(name);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mut selected = self.lang.clone();
                    let codes: Vec<String> =
                        self.content.language_codes().map(str::to_string).collect();

                    egui::ComboBox::from_id_salt("language")
                        .selected_text(selected.clone())
                        .show_ui(ui, |ui| {
                            for code in &codes {
                                ui.selectable_value(&mut selected, code.clone(), code);
                            }
                        });

                    if selected != self.lang {
                        self.set_language(&selected);
                    }
                });
            });
        });
    }

    /// Builds the bottom contact panel: node network plus heading.
    fn ui_contact_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("contact")
            .resizable(true)
            .default_height(220.0)
            .show(ctx, |ui| {
                let rect = ui.available_rect_before_wrap();
                let painter = ui.painter_at(rect);

                self.contact
                    .sync_surface(Vec2::new(rect.width(), rect.height()), &mut self.rng);
                self.contact.advance(None);
                self.contact.paint(&painter, rect.min);

                if let Some(content) = self.content.get(&self.lang) {
                    painter.text(
                        rect.left_top() + egui::vec2(16.0, 16.0),
                        egui::Align2::LEFT_TOP,
                        &content.contact.heading,
                        egui::FontId::proportional(22.0),
                        egui::Color32::WHITE,
                    );
                }
            });
    }

    /// Builds the central hero panel: ambient background plus the
    /// headline and typewriter line.
    fn ui_hero_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            let painter = ui.painter_at(rect);

            self.hero
                .sync_surface(Vec2::new(rect.width(), rect.height()), &mut self.rng);

            // Global pointer position, None until the first pointer
            // event, translated into surface coordinates.
            self.remember_pointer(ctx.input(|i| i.pointer.latest_pos()));
            let pointer = self
                .last_pointer
                .map(|p| Vec2::new(p.x - rect.min.x, p.y - rect.min.y));

            self.hero.advance(pointer);
            self.hero.paint(&painter, rect.min);

            if let Some(content) = self.content.get(&self.lang) {
                painter.text(
                    rect.center() - egui::vec2(0.0, 24.0),
                    egui::Align2::CENTER_CENTER,
                    &content.hero.headline,
                    egui::FontId::proportional(36.0),
                    egui::Color32::WHITE,
                );
            }

            painter.text(
                rect.center() + egui::vec2(0.0, 24.0),
                egui::Align2::CENTER_CENTER,
                self.typewriter.text(),
                egui::FontId::monospace(22.0),
                egui::Color32::from_rgb(0, 240, 255),
            );
        });
    }
}

impl App for Viewer {
    /// eframe callback that builds all panels for each frame and
    /// keeps the animation loop running.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        self.drive_typewriter(now);

        self.ui_top_bar(ctx);
        self.ui_contact_panel(ctx);
        self.ui_hero_panel(ctx);

        // Continuous animation: reschedule unconditionally.
        ctx.request_repaint();
    }
}
