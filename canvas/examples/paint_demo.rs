//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//


//! Paints a few overlapping regions onto a block and prints a character map
//! of the result.
//!
//! Run with `RUST_LOG=termgrid_canvas=debug` to see allocation and painting
//! events.

use termgrid_canvas::algorithms::{compute_area_size, find_square};
use termgrid_canvas::{Area, Block, CanvasConfig, Color, Intensity, Matrix, Style};
use tracing::info;

fn glyph(style: &Style) -> char {
    match (style.foreground, style.background) {
        (Some(Color::Red), Some(Color::Blue)) => '#',
        (Some(Color::Red), _) => 'r',
        (_, Some(Color::Blue)) => 'b',
        _ if style.is_plain() => '.',
        _ => '?',
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = CanvasConfig::terminal();
    let mut block = Block::with_config(Area::square(0, 0, 12)?, &config)?;
    info!(area = %block.area(), "created block");

    let red = Style::plain()
        .with_foreground(Color::Red)
        .with_intensity(Intensity::Bold);
    let blue = Style::plain().with_background(Color::Blue);

    let painted = block.paint(&Area::square(1, 1, 6)?, red);
    info!(painted, "painted red region");
    let painted = block.paint(&Area::square(4, 4, 7)?, blue);
    info!(painted, "painted blue region");

    let map = Matrix::from_fn(block.height(), block.width(), |row, column| {
        block.style(row, column).map(glyph).unwrap_or('?')
    });
    println!("{}", map);

    let components = compute_area_size(block.matrix(), &Style::plain(), Style::cmp)?;
    info!(?components, "styled components");

    if let Some(square) = find_square(block.matrix(), &Style::plain(), Style::cmp)? {
        info!(%square, size = square.width(), "largest styled square");
    }
    Ok(())
}
