// File: crates/window-demo/src/main.rs
// Summary: Minimal windowed viewer blitting the rendered tornado chart via winit + softbuffer.

use std::num::NonZeroU32;

use tornado_core::{theme, Dataset, RenderOptions, SalesRecord, TornadoChart};
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() {
    let chart = TornadoChart::new(sample_dataset());

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Tornado Chart — Window Demo")
        .with_inner_size(winit::dpi::LogicalSize::new(900.0, 700.0))
        .build(&event_loop)
        .expect("build window");

    let context = unsafe { softbuffer::Context::new(&window) }.expect("softbuffer context");
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.expect("softbuffer surface");

    let themes = theme::presets();
    let mut theme_idx = 0usize;
    let mut size = window.inner_size();

    event_loop.run(move |event, _, cf| {
        if *cf == ControlFlow::Exit {
            return;
        }
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput { input, .. }
                    if input.state == ElementState::Pressed =>
                {
                    // Any key cycles through the theme presets.
                    theme_idx = (theme_idx + 1) % themes.len();
                    window.request_redraw();
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let w = size.width.max(1);
                let h = size.height.max(1);
                surface
                    .resize(NonZeroU32::new(w).unwrap(), NonZeroU32::new(h).unwrap())
                    .ok();

                let mut opts = RenderOptions::default();
                opts.width = w as i32;
                opts.height = h as i32;
                opts.theme = themes[theme_idx];

                // Render to RGBA and convert to packed u32 for softbuffer.
                match chart.render_to_rgba8(&opts) {
                    Ok((rgba, _, _, _)) => {
                        let mut frame = surface.buffer_mut().expect("frame");
                        let max_px = frame.len().min(rgba.len() / 4);
                        for (i, px) in rgba.chunks_exact(4).take(max_px).enumerate() {
                            let r = px[0] as u32;
                            let g = px[1] as u32;
                            let b = px[2] as u32;
                            let a = px[3] as u32;
                            // Softbuffer expects ARGB or BGRA depending on platform; BGRA is common.
                            frame[i] = (a << 24) | (r << 16) | (g << 8) | b;
                        }
                        if let Err(e) = frame.present() {
                            eprintln!("present error: {e:?}");
                        }
                    }
                    Err(e) => eprintln!("render error: {e:#}"),
                }
            }
            _ => {}
        }
    });
}

fn sample_dataset() -> Dataset {
    let rows = [
        ("Espresso Beans", 12400.0, 11800.0, 0.93, "North"),
        ("Filter Roast", 9800.0, 10600.0, 0.84, "South"),
        ("Cold Brew Cans", 7600.0, 9200.0, 0.71, "East"),
        ("Decaf Blend", 4300.0, 4100.0, 0.95, "West"),
        ("Oat Milk", 15200.0, 13900.0, 0.82, "North"),
        ("Paper Cups", 22000.0, 24500.0, 0.66, "Central"),
        ("Ceramic Mugs", 3100.0, 2600.0, 0.78, "South"),
        ("Tea Assortment", 6800.0, 8400.0, 0.58, "North"),
    ];
    let records = rows
        .iter()
        .map(|&(item, forecast, actual, accuracy, region)| SalesRecord {
            item: item.to_string(),
            forecast_volume: forecast,
            actual_volume: actual,
            accuracy,
            difference: forecast - actual,
            region: region.to_string(),
        })
        .collect();
    Dataset::from_records(records).expect("sample dataset is valid")
}
