use crate::NotebookApp;

pub fn saved_panel(app: &mut NotebookApp, ctx: &egui::Context) {
    egui::SidePanel::right("saved_panel")
        .resizable(true)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Elemen");
            if app.saved().is_empty() {
                ui.weak("Belum ada elemen.");
                return;
            }
            egui::ScrollArea::vertical().show(ui, |ui| {
                for element in app.saved().iter().rev() {
                    ui.group(|ui| {
                        ui.horizontal(|ui| {
                            ui.strong(&element.title);
                            ui.small(element.kind.label());
                        });
                        ui.label(element.content.plain_text());
                    });
                }
            });
        });
}
