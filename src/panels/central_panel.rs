use crate::WhiteboardApp;

/// The drawing canvas: feeds input to the whiteboard, then paints it
pub fn central_panel(app: &mut WhiteboardApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            let canvas_rect = response.rect;

            app.handle_input(ctx, canvas_rect);

            let whiteboard = app.whiteboard();
            app.renderer().render(
                &painter,
                canvas_rect,
                whiteboard.document(),
                whiteboard.viewport(),
            );

            if response.hovered() {
                ctx.set_cursor_icon(app.whiteboard().cursor());
            }
        });
}
