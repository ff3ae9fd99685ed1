use crate::NotebookApp;
use crate::content::{Block, BlockKind};
use crate::selection::{Position, Selection};
use crate::surface::EditorSurface;

const HIGHLIGHT: egui::Color32 = egui::Color32::from_rgb(253, 230, 138);

enum BlockAction {
    Caret(Position),
    Select(Selection),
}

fn block_prefix(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::Paragraph => "",
        BlockKind::Heading(1) => "H1",
        BlockKind::Heading(2) => "H2",
        BlockKind::Heading(_) => "H3",
        BlockKind::Blockquote => "❝",
        BlockKind::ListItem { ordered: false } => "•",
        BlockKind::ListItem { ordered: true } => "1.",
        BlockKind::Divider => "",
    }
}

fn show_block(ui: &mut egui::Ui, block: &Block, has_caret: bool) {
    if block.kind.is_divider() {
        ui.separator();
        return;
    }
    let size = match block.kind {
        BlockKind::Heading(1) => 22.0,
        BlockKind::Heading(2) => 19.0,
        BlockKind::Heading(_) => 16.0,
        _ => 14.0,
    };
    ui.spacing_mut().item_spacing.x = 0.0;
    let prefix = block_prefix(block.kind);
    if !prefix.is_empty() {
        ui.weak(format!("{prefix} "));
    }
    for run in &block.runs {
        let mut text = egui::RichText::new(&run.text).size(size);
        if run.style.bold || matches!(block.kind, BlockKind::Heading(_)) {
            text = text.strong();
        }
        if run.style.italic || block.kind == BlockKind::Blockquote {
            text = text.italics();
        }
        if run.style.underline {
            text = text.underline();
        }
        if run.style.highlight > 0 {
            text = text.background_color(HIGHLIGHT).color(egui::Color32::BLACK);
        }
        ui.label(text);
    }
    if has_caret {
        ui.label(egui::RichText::new("|").size(size).strong());
    }
}

pub fn central_panel(app: &mut NotebookApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let Some(session) = app.session() else {
            ui.label("Tiada elemen sedang disunting.");
            if ui.button("Elemen baharu").clicked() {
                app.open_session();
            }
            return;
        };

        let mut title = session.title().to_owned();
        ui.horizontal(|ui| {
            ui.label("Tajuk");
            let edit = egui::TextEdit::singleline(&mut title)
                .hint_text("Tajuk elemen (contoh: Ayat contoh 1, Nota ringkas, Karangan pendek)")
                .desired_width(f32::INFINITY);
            if ui.add(edit).changed() {
                app.set_title(title);
            }
        });
        if let Some(message) = app.inline_message() {
            ui.colored_label(egui::Color32::from_rgb(220, 38, 38), message);
        }
        ui.separator();

        let action = egui::ScrollArea::vertical()
            .max_height(ui.available_height() * 0.55)
            .show(ui, |ui| {
                let session = app.session()?;
                let surface = session.surface();
                let caret = surface.caret();
                let collapsed = surface.selection().is_none_or(|s| s.is_collapsed());
                let mut action = None;

                for (index, block) in surface.content().blocks.iter().enumerate() {
                    ui.horizontal_wrapped(|ui| {
                        let end = Position::new(index, block.len());
                        if ui.small_button("⏵").on_hover_text("Letak kursor di hujung").clicked() {
                            action = Some(BlockAction::Caret(end));
                        }
                        if ui.small_button("▣").on_hover_text("Pilih blok").clicked() {
                            action = Some(BlockAction::Select(Selection::new(Position::new(index, 0), end)));
                        }
                        show_block(ui, block, collapsed && caret.block == index);
                    });
                }
                action
            })
            .inner;

        match action {
            Some(BlockAction::Caret(at)) => app.select(Selection::caret(at)),
            Some(BlockAction::Select(selection)) => app.select(selection),
            None => {}
        }

        ui.separator();
        ui.horizontal(|ui| {
            ui.label("Pilih dari");
            ui.add(egui::DragValue::new(&mut app.selection_from.0).prefix("blok "));
            ui.add(egui::DragValue::new(&mut app.selection_from.1).prefix("aksara "));
            ui.label("hingga");
            ui.add(egui::DragValue::new(&mut app.selection_to.0).prefix("blok "));
            ui.add(egui::DragValue::new(&mut app.selection_to.1).prefix("aksara "));
            if ui.button("Tetapkan").clicked() {
                app.select_range();
            }
        });

        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::multiline(&mut app.draft)
                    .hint_text("Taip di sini, kemudian tekan Masukkan")
                    .desired_rows(2),
            );
            if ui.button("Masukkan").clicked() {
                app.insert_draft();
            }
            if ui.button("⌫").clicked() {
                app.delete_backward();
            }
        });

        if let Some(session) = app.session() {
            egui::CollapsingHeader::new("Markup").show(ui, |ui| {
                ui.monospace(session.content().to_markup());
            });
        }

        ui.separator();
        ui.horizontal(|ui| {
            ui.weak("Tip: pilih template untuk jana rangka, kemudian ubah isi ikut gaya anda.");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Simpan Elemen").clicked() {
                    app.save_element();
                }
                if ui.button("Batal").clicked() {
                    app.request_cancel();
                }
            });
        });
    });
}
