use crate::NotebookApp;
use crate::command::Command;
use crate::template::Template;

fn caption(command: Command) -> egui::RichText {
    let text = egui::RichText::new(command.label());
    match command {
        Command::Bold => text.strong(),
        Command::Italic => text.italics(),
        Command::Underline => text.underline(),
        _ => text,
    }
}

pub fn toolbar_panel(app: &mut NotebookApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("toolbar_panel").show(ctx, |ui| {
        let Some(session) = app.session() else {
            return;
        };
        let selected = session.template();
        let can_undo = session.history().can_undo();
        let can_redo = session.history().can_redo();
        let undo_len = session.history().undo_len();
        let redo_len = session.history().redo_len();

        let mut picked = None;
        let mut clicked = None;

        ui.horizontal_wrapped(|ui| {
            egui::ComboBox::from_id_salt("template_picker")
                .selected_text(selected.map_or("Pilih template (optional)", |t| t.label()))
                .show_ui(ui, |ui| {
                    for template in Template::ALL {
                        if ui
                            .selectable_label(selected == Some(template), template.label())
                            .clicked()
                        {
                            picked = Some(template);
                        }
                    }
                });
            ui.separator();

            for command in Command::ALL {
                let enabled = match command {
                    Command::Undo => can_undo,
                    Command::Redo => can_redo,
                    _ => true,
                };
                if ui.add_enabled(enabled, egui::Button::new(caption(command))).clicked() {
                    log::info!("Toolbar command: {command}");
                    clicked = Some(command);
                }
                if matches!(
                    command,
                    Command::Underline | Command::HorizontalRule | Command::Highlight
                ) {
                    ui.separator();
                }
            }
        });

        ui.horizontal(|ui| {
            ui.label(format!("Undo stack size: {undo_len}"));
            ui.label(format!("Redo stack size: {redo_len}"));
        });

        if let Some(template) = picked {
            app.apply_template(template);
        }
        if let Some(command) = clicked {
            app.dispatch(command);
        }
    });
}
