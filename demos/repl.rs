//! A line-oriented stand-in for a clipping GUI.
//!
//! Run with: cargo run --example repl
//!
//! Commands (one per line):
//!
//! ```text
//! segment x1 y1 x2 y2    add a segment
//! window xmin ymin xmax ymax
//!                        set the clip window
//! vertex x y             add a polygon vertex (a pointer click)
//! finish                 close the polygon (needs 3 vertices)
//! clip                   clip and print the visible geometry
//! svg PATH               write the scene and its clip result as SVG
//! show                   print the scene
//! clear                  discard everything
//! quit
//! ```
//!
//! Set `RUST_LOG=debug` to trace scene updates.

use rectclip::input::parse_point;
use rectclip::render::{SvgRenderer, SvgStyle};
use rectclip::Scene;

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::Path;

fn main() -> io::Result<()> {
    env_logger::init();

    let mut scene: Scene<f64> = Scene::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    prompt(&mut stdout)?;
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        let (command, args) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        match command {
            "" => {}
            "segment" => match scene.add_segment_str(args) {
                Ok(s) => println!("added segment {:?} -> {:?}", s.start, s.end),
                Err(e) => println!("error: {}", e),
            },
            "window" => match scene.set_window_str(args) {
                Ok(w) => println!("window set to {:?} - {:?}", w.min(), w.max()),
                Err(e) => println!("error: {}", e),
            },
            "vertex" => match parse_point::<f64>(args) {
                Ok(p) if scene.push_vertex(p) => {
                    println!("{} vertices", scene.polygon_vertices().len())
                }
                Ok(_) => println!("polygon already finished; clear to start a new one"),
                Err(e) => println!("error: {}", e),
            },
            "finish" => {
                if scene.finish_polygon() {
                    println!("polygon closed");
                } else {
                    println!("nothing to finish");
                }
            }
            "clip" => match scene.clip() {
                Some(output) => {
                    for (i, clipped) in output.segments.iter().enumerate() {
                        match clipped {
                            Some(s) => println!("segment {}: {:?} -> {:?}", i + 1, s.start, s.end),
                            None => println!("segment {}: not visible", i + 1),
                        }
                    }
                    match &output.polygon {
                        Some(p) => println!("polygon: {:?}", p.vertices),
                        None if scene.polygon_vertices().is_empty() => {}
                        None => println!("polygon: not visible"),
                    }
                }
                None => println!("set a window first"),
            },
            "svg" if !args.is_empty() => {
                let mut svg = SvgRenderer::new(SvgStyle::default());
                scene.draw(&mut svg);
                scene.run_clip(&mut svg);
                match write_svg(args, &svg.finish()) {
                    Ok(()) => println!("wrote {}", args),
                    Err(e) => println!("error: could not write {}: {}", args, e),
                }
            }
            "show" => println!("{}", scene),
            "clear" => {
                scene.clear();
                println!("cleared");
            }
            "quit" | "exit" => break,
            other => println!("unknown command '{}'", other),
        }

        prompt(&mut stdout)?;
    }

    Ok(())
}

fn prompt(stdout: &mut io::Stdout) -> io::Result<()> {
    print!("> ");
    stdout.flush()
}

fn write_svg(path: impl AsRef<Path>, document: &str) -> io::Result<()> {
    File::create(path)?.write_all(document.as_bytes())
}
