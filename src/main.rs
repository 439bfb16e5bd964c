use sdl2::keyboard::Keycode;

use veneer::display::{Display, InputEvent, RenderTarget, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use veneer::{
    ArrowDirection, DrawState, EdgeStyle, FillMode, OwnedSurface, Painter, PixelFormat,
    ShadingMode,
};

/// Parse command line arguments and return (width, height, vsync)
fn parse_args() -> (u32, u32, bool) {
    let args: Vec<String> = std::env::args().collect();
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;
    let mut vsync = true;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--no-vsync" => vsync = false,
            "--width" | "-w" => {
                if i + 1 < args.len() {
                    if let Ok(w) = args[i + 1].parse::<u32>() {
                        width = w;
                    }
                    i += 1;
                }
            },
            "--height" | "-h" => {
                if i + 1 < args.len() {
                    if let Ok(h) = args[i + 1].parse::<u32>() {
                        height = h;
                    }
                    i += 1;
                }
            },
            "--help" => {
                println!("Usage: veneer-demo [OPTIONS]");
                println!();
                println!("Options:");
                println!(
                    "  --width W, -w W       Set window width (default: {})",
                    DEFAULT_WIDTH
                );
                println!(
                    "  --height H, -h H      Set window height (default: {})",
                    DEFAULT_HEIGHT
                );
                println!("  --no-vsync            Disable VSync for uncapped framerate");
                println!("  --help                Show this help message");
                std::process::exit(0);
            },
            _ => {},
        }
        i += 1;
    }

    (width, height, vsync)
}

/// Paint a static mock widget scene exercising every primitive
fn paint_scene(frame: &mut OwnedSurface) {
    let w = frame.width() as i32;
    let h = frame.height() as i32;
    let fmt = frame.format();

    let mut p = Painter::new(DrawState::new(fmt), EdgeStyle::Aliased);

    // Desktop backdrop
    p.state.set_fill_mode(FillMode::Gradient);
    p.state.set_gradient((28, 34, 52), (10, 12, 18));
    p.fill_surface(&mut frame.view());

    // Main panel with a drop shadow
    let (px, py, pw, ph) = (40, 72, w - 80, h - 140);
    p.state.set_shadow_offset(6);
    p.draw_shadow(&mut frame.view(), px, py, pw, ph);
    p.state.set_fill_mode(FillMode::Background);
    p.state.set_background(58, 62, 70);
    p.state.set_foreground(110, 116, 128);
    p.state.set_stroke_width(1);
    p.draw_rounded_rect(&mut frame.view(), px, py, pw, ph, 10);

    // Gradient title bar across the panel top
    p.state.set_fill_mode(FillMode::Gradient);
    p.state.set_gradient((30, 90, 170), (14, 36, 70));
    p.state.set_foreground(150, 170, 200);
    p.draw_rect(&mut frame.view(), px + 2, py + 2, pw - 4, 26);

    // Tab row sitting on the panel's top edge
    p.state.set_fill_mode(FillMode::Foreground);
    p.state.set_foreground(80, 86, 96);
    for i in 0..3 {
        let tx = px + 16 + i * 104;
        p.draw_tab(&mut frame.view(), tx, py - 22, 96, 23, 6, 0, 4);
    }

    // Buttons with bevels
    p.state.set_bevel(2, 140, 146, 158);
    for i in 0..2 {
        let bx = px + 24 + i * 150;
        let by = py + 48;
        p.state.set_fill_mode(FillMode::Foreground);
        p.state.set_foreground(92, 98, 110);
        p.draw_rounded_rect(&mut frame.view(), bx, by, 128, 36, 6);
        p.draw_bevel(&mut frame.view(), bx, by, 128, 36);
    }

    // Scrollbar along the panel's right edge
    let sx = px + pw - 22;
    let sy = py + 36;
    let sh = ph - 44;
    p.state.set_fill_mode(FillMode::Background);
    p.state.set_background(44, 47, 54);
    p.state.set_stroke_width(0);
    p.draw_rect(&mut frame.view(), sx, sy, 14, sh);
    p.state.set_fill_mode(FillMode::Foreground);
    p.state.set_foreground(120, 126, 138);
    p.draw_rounded_rect(&mut frame.view(), sx + 2, sy + 40, 10, 64, 4);
    p.draw_arrow(&mut frame.view(), sx + 7, sy + 4, 8, ArrowDirection::Up);
    p.draw_arrow(&mut frame.view(), sx + 7, sy + sh - 5, 8, ArrowDirection::Down);

    // Antialiased accents: a status knob and a diagonal separator
    let mut aa = Painter::new(DrawState::new(fmt), EdgeStyle::AntiAliased);
    aa.state.set_fill_mode(FillMode::Foreground);
    aa.state.set_foreground(90, 200, 120);
    aa.state.set_stroke_width(0);
    aa.draw_circle(&mut frame.view(), px + 24, py + ph - 24, 9);
    aa.state.set_foreground(110, 116, 128);
    aa.state.set_stroke_width(1);
    aa.draw_line(
        &mut frame.view(),
        px + 48,
        py + ph - 16,
        px + pw - 48,
        py + 110,
    );

    // Modal dialog dimming the panel center underneath it
    let (mx, my, mw, mh) = (w / 2 - 130, h / 2 - 70, 260, 140);
    frame
        .view()
        .apply_shading(ShadingMode::Dim, px, py, pw, ph);
    p.state.set_fill_mode(FillMode::Background);
    p.state.set_background(70, 74, 84);
    p.state.set_foreground(160, 166, 178);
    p.state.set_stroke_width(2);
    p.state.set_shadow_offset(4);
    p.draw_shadow(&mut frame.view(), mx, my, mw, mh);
    p.draw_rounded_rect(&mut frame.view(), mx, my, mw, mh, 8);
}

fn main() -> Result<(), String> {
    let (width, height, vsync) = parse_args();

    let (mut display, texture_creator) =
        Display::with_options("veneer demo", width, height, vsync)?;
    let mut target = RenderTarget::with_size(&texture_creator, width, height)?;
    let mut frame = OwnedSurface::new(width, height, PixelFormat::Rgba8888);

    paint_scene(&mut frame);

    println!("=== veneer demo ===");
    println!("Resolution: {}x{}", width, height);
    println!("Press Escape or Q to quit");

    'running: loop {
        for event in display.poll_events() {
            match event {
                InputEvent::Quit
                | InputEvent::KeyDown(Keycode::Escape)
                | InputEvent::KeyDown(Keycode::Q) => break 'running,
                _ => {},
            }
        }
        display.present(&mut target, &frame)?;
    }

    Ok(())
}
