use crate::tools::ToolKind;
use crate::WhiteboardApp;

pub fn tools_panel(app: &mut WhiteboardApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Tools");
                let active = app.whiteboard().tool_kind();
                for kind in ToolKind::ALL {
                    if ui.selectable_label(active == kind, kind.name()).clicked() {
                        app.whiteboard_mut().set_tool(kind);
                    }
                }
                ui.separator();

                history_section(app, ui);
                ui.separator();

                style_section(app, ui);
                ui.separator();

                view_section(app, ui);
                ui.separator();

                layers_section(app, ui);
            });
        });
}

fn history_section(app: &mut WhiteboardApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        let can_undo = app.whiteboard().can_undo();
        let can_redo = app.whiteboard().can_redo();

        if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
            app.whiteboard_mut().undo();
        }
        if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
            app.whiteboard_mut().redo();
        }
        if ui.button("Clear").clicked() {
            app.whiteboard_mut().clear_canvas();
        }
    });

    let history = app.whiteboard().commands();
    egui::Grid::new("command_history_grid")
        .num_columns(2)
        .spacing([40.0, 4.0])
        .striped(true)
        .show(ui, |ui| {
            ui.strong("Undo Stack");
            ui.strong("Redo Stack");
            ui.end_row();

            let undo_stack = history.undo_stack();
            let redo_stack = history.redo_stack();
            for i in 0..undo_stack.len().max(redo_stack.len()) {
                ui.label(undo_stack.get(i).map_or("", |command| command.name()));
                ui.label(redo_stack.get(i).map_or("", |command| command.name()));
                ui.end_row();
            }
        });
}

fn style_section(app: &mut WhiteboardApp, ui: &mut egui::Ui) {
    ui.heading("Style");
    let mut style = app.whiteboard().style();

    ui.horizontal(|ui| {
        ui.label("Color:");
        egui::color_picker::color_edit_button_srgba(
            ui,
            &mut style.color,
            egui::color_picker::Alpha::Opaque,
        );
    });
    ui.horizontal(|ui| {
        ui.label("Width:");
        ui.add(egui::Slider::new(&mut style.width, 0.5..=50.0));
    });
    ui.horizontal(|ui| {
        let mut filled = style.fill.is_some();
        ui.checkbox(&mut filled, "Fill");
        if filled {
            let mut fill = style.fill.unwrap_or(style.color);
            egui::color_picker::color_edit_button_srgba(
                ui,
                &mut fill,
                egui::color_picker::Alpha::OnlyBlend,
            );
            style.fill = Some(fill);
        } else {
            style.fill = None;
        }
    });

    if style != app.whiteboard().style() {
        app.whiteboard_mut().set_style(style);
    }
}

fn view_section(app: &mut WhiteboardApp, ui: &mut egui::Ui) {
    ui.heading("View");
    let viewport = *app.whiteboard().viewport();
    ui.label(format!("Zoom: {:.0}%", viewport.scale() * 100.0));
    ui.label(format!("Origin: ({:.0}, {:.0})", viewport.x(), viewport.y()));

    let mut config = app.whiteboard().config().clone();
    ui.horizontal(|ui| {
        ui.label("Wheel sensitivity:");
        ui.add(egui::Slider::new(&mut config.zoom_sensitivity, 0.0001..=0.01).logarithmic(true));
    });
    ui.horizontal(|ui| {
        ui.label("Eraser radius:");
        ui.add(egui::Slider::new(&mut config.erase_radius, 0.0..=50.0).suffix(" px"));
    });

    if &config != app.whiteboard().config() {
        // Style is owned by the style section; keep the live one.
        config.style = app.whiteboard().style();
        if let Err(err) = app.whiteboard_mut().apply_config(config) {
            log::warn!("Rejected settings change: {}", err);
        }
    }

    if ui.button("Reset view").clicked() {
        if let Err(err) = app.whiteboard_mut().reset_view() {
            log::warn!("Could not reset view: {}", err);
        }
    }
}

fn layers_section(app: &mut WhiteboardApp, ui: &mut egui::Ui) {
    ui.heading("Layers");

    let active = app.whiteboard().document().active_layer_id();
    let layers: Vec<_> = app
        .whiteboard()
        .layers()
        .iter()
        .map(|layer| (layer.id(), layer.name.clone(), layer.visible, layer.len()))
        .collect();
    let removable = layers.len() > 1;

    for (id, name, visible, count) in layers.into_iter().rev() {
        ui.horizontal(|ui| {
            let mut shown = visible;
            if ui.checkbox(&mut shown, "").changed() {
                app.whiteboard_mut().set_layer_visible(id, shown);
            }
            let label = format!("{} ({})", name, count);
            if ui.selectable_label(active == Some(id), label).clicked() {
                if let Err(err) = app.whiteboard_mut().set_active_layer(id) {
                    log::warn!("{}", err);
                }
            }
            if removable && ui.small_button("x").clicked() {
                app.whiteboard_mut().remove_layer(id);
            }
        });
    }

    if ui.button("Add Layer").clicked() {
        let name = format!("Layer {}", app.whiteboard().layers().len() + 1);
        app.whiteboard_mut().add_layer(&name);
    }
}
