// File: crates/window-demo/src/main.rs
// Summary: Windowed tour of the catalog, portfolio, and trading screens via RGBA blit (CPU) using winit + softbuffer.
// Keys: Tab cycles screens, Left/Right page through or switch entries, Up/Down cycle the
// platform filter, F1 cycles the theme, Esc quits. On the catalog screen typed text
// becomes the search and Backspace edits it.

use std::num::NonZeroU32;
use std::time::Instant;

use anyhow::{Context, Result};
use marquee_core::showcase::{DetailPage, PortfolioRow};
use marquee_core::{
    layout_bars, layout_candles, page_view, showcase, theme, CarouselState, CatalogEntry,
    FilterState, Rect, Theme, CAROUSEL_INTERVAL, PAGE_SIZE,
};
use marquee_raster::{
    card_at, poster_tint, render_bar_chart, render_candle_chart, render_card_sheet, Frame,
};
use winit::event::{ElementState, Event, StartCause, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Screen {
    Carousel,
    Trending,
    Grid,
    Portfolio,
    Detail,
}

impl Screen {
    fn next(self) -> Self {
        match self {
            Self::Carousel => Self::Trending,
            Self::Trending => Self::Grid,
            Self::Grid => Self::Portfolio,
            Self::Portfolio => Self::Detail,
            Self::Detail => Self::Carousel,
        }
    }
}

struct App {
    screen: Screen,
    filter: FilterState,
    platform_idx: usize,
    hover: Option<usize>,
    themes: Vec<Theme>,
    theme_idx: usize,
    portfolio_idx: usize,
    detail_idx: usize,
    carousel: CarouselState,
    catalog: Vec<CatalogEntry>,
    trending: Vec<CatalogEntry>,
    rows: Vec<PortfolioRow>,
    pages: Vec<DetailPage>,
}

impl App {
    fn new() -> Self {
        Self {
            screen: Screen::Carousel,
            filter: FilterState::new(),
            platform_idx: 0,
            hover: None,
            themes: theme::presets(),
            theme_idx: 0,
            portfolio_idx: 0,
            detail_idx: 0,
            carousel: CarouselState::new(showcase::CAROUSEL_POSTERS.len()),
            catalog: showcase::catalog(),
            trending: showcase::trending(),
            rows: showcase::portfolio(),
            pages: showcase::detail_pages(),
        }
    }

    fn theme(&self) -> &Theme {
        &self.themes[self.theme_idx]
    }

    /// Paint the active screen at the given surface size.
    fn frame(&self, w: u32, h: u32) -> Frame {
        let theme = self.theme();
        match self.screen {
            Screen::Carousel => hero_frame(&self.carousel, theme, w, h),
            Screen::Trending => {
                let picks: Vec<&CatalogEntry> = self.trending.iter().collect();
                render_card_sheet(&picks, None, theme, w, h)
            }
            Screen::Grid => {
                let view = page_view(&self.catalog, &self.filter, PAGE_SIZE);
                render_card_sheet(&view.items, self.hover, theme, w, h)
            }
            Screen::Portfolio => {
                let row = &self.rows[self.portfolio_idx];
                render_bar_chart(&layout_bars(&row.series, w as f32, h as f32), theme)
            }
            Screen::Detail => {
                let page = &self.pages[self.detail_idx];
                render_candle_chart(&layout_candles(&page.series, w as f32, h as f32), theme)
            }
        }
    }

    /// Window title doubling as the status line.
    fn title(&self) -> String {
        let theme = self.theme().name;
        match self.screen {
            Screen::Carousel => format!(
                "Marquee — Now Showing {}/{} — {theme}",
                self.carousel.index() + 1,
                self.carousel.len()
            ),
            Screen::Trending => format!("Marquee — Trending — {} picks — {theme}", self.trending.len()),
            Screen::Grid => {
                let view = page_view(&self.catalog, &self.filter, PAGE_SIZE);
                format!(
                    "Marquee — Catalog p{}/{} — {} match(es) — [{}] \"{}\" — {theme}",
                    self.filter.page,
                    view.total_pages,
                    view.matches,
                    self.filter.platform,
                    self.filter.search
                )
            }
            Screen::Portfolio => {
                format!("Marquee — Portfolio — {} — {theme}", self.rows[self.portfolio_idx].title)
            }
            Screen::Detail => {
                let page = &self.pages[self.detail_idx];
                format!("Marquee — {} — {} — {theme}", page.title, page.platform)
            }
        }
    }

    fn key(&mut self, code: VirtualKeyCode) {
        match code {
            VirtualKeyCode::Tab => {
                self.screen = self.screen.next();
                self.hover = None;
            }
            VirtualKeyCode::Left => match self.screen {
                Screen::Grid => self.filter.prev_page(),
                Screen::Portfolio => {
                    self.portfolio_idx =
                        (self.portfolio_idx + self.rows.len() - 1) % self.rows.len();
                }
                Screen::Detail => {
                    self.detail_idx = (self.detail_idx + self.pages.len() - 1) % self.pages.len();
                }
                Screen::Carousel => {
                    let back = self.carousel.index() + self.carousel.len().saturating_sub(1);
                    self.carousel.select(back);
                }
                Screen::Trending => {}
            },
            VirtualKeyCode::Right => match self.screen {
                Screen::Grid => self.filter.next_page(),
                Screen::Portfolio => {
                    self.portfolio_idx = (self.portfolio_idx + 1) % self.rows.len();
                }
                Screen::Detail => {
                    self.detail_idx = (self.detail_idx + 1) % self.pages.len();
                }
                Screen::Carousel => self.carousel.advance(),
                Screen::Trending => {}
            },
            VirtualKeyCode::Up => {
                let n = showcase::PLATFORMS.len();
                self.platform_idx = (self.platform_idx + n - 1) % n;
                self.filter.platform = showcase::PLATFORMS[self.platform_idx].to_string();
            }
            VirtualKeyCode::Down => {
                self.platform_idx = (self.platform_idx + 1) % showcase::PLATFORMS.len();
                self.filter.platform = showcase::PLATFORMS[self.platform_idx].to_string();
            }
            VirtualKeyCode::F1 => {
                self.theme_idx = (self.theme_idx + 1) % self.themes.len();
            }
            VirtualKeyCode::Back => {
                if self.screen == Screen::Grid {
                    self.filter.search.pop();
                }
            }
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Marquee — Window Demo")
        .with_inner_size(winit::dpi::LogicalSize::new(1024.0, 640.0))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }.expect("softbuffer context");
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.expect("softbuffer surface");

    let mut app = App::new();
    let mut size = window.inner_size();
    let mut next_tick = Instant::now() + CAROUSEL_INTERVAL;
    window.set_title(&app.title());

    event_loop.run(move |event, _, cf| {
        // The carousel auto-advances; every other screen just waits for input
        if *cf != ControlFlow::Exit {
            *cf = if app.screen == Screen::Carousel {
                ControlFlow::WaitUntil(next_tick)
            } else {
                ControlFlow::Wait
            };
        }
        match event {
            Event::NewEvents(StartCause::ResumeTimeReached { .. }) => {
                app.carousel.advance();
                next_tick = Instant::now() + CAROUSEL_INTERVAL;
                window.set_title(&app.title());
                window.request_redraw();
            }
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                }
                WindowEvent::CursorMoved { position, .. } => {
                    if app.screen == Screen::Grid {
                        let count = page_view(&app.catalog, &app.filter, PAGE_SIZE).items.len();
                        let hover = card_at(
                            size.width.max(1) as f32,
                            count,
                            position.x as f32,
                            position.y as f32,
                        );
                        if hover != app.hover {
                            app.hover = hover;
                            window.request_redraw();
                        }
                    }
                }
                WindowEvent::ReceivedCharacter(ch) => {
                    if app.screen == Screen::Grid && !ch.is_control() {
                        app.filter.search.push(ch);
                        window.set_title(&app.title());
                        window.request_redraw();
                    }
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    if input.state == ElementState::Pressed {
                        match input.virtual_keycode {
                            Some(VirtualKeyCode::Escape) => {
                                *cf = ControlFlow::Exit;
                            }
                            Some(code) => {
                                app.key(code);
                                if app.screen == Screen::Carousel {
                                    next_tick = Instant::now() + CAROUSEL_INTERVAL;
                                }
                                window.set_title(&app.title());
                                window.request_redraw();
                            }
                            None => {}
                        }
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                window.request_redraw();
            }
            Event::RedrawRequested(_) => {
                let frame = app.frame(size.width.max(1), size.height.max(1));
                blit(&mut surface, frame);
            }
            _ => {}
        }
    });
}

/// Push a finished frame to the window surface.
fn blit(surface: &mut softbuffer::Surface, frame: Frame) {
    let (rgba, w, h, _stride) = frame.into_rgba8();
    surface
        .resize(NonZeroU32::new(w).unwrap(), NonZeroU32::new(h).unwrap())
        .ok();
    let mut buf = match surface.buffer_mut() {
        Ok(buf) => buf,
        Err(e) => {
            eprintln!("surface buffer error: {e:?}");
            return;
        }
    };
    let max_px = buf.len().min(rgba.len() / 4);
    for (i, px) in rgba.chunks_exact(4).take(max_px).enumerate() {
        let r = px[0] as u32;
        let g = px[1] as u32;
        let b = px[2] as u32;
        let a = px[3] as u32;
        // Softbuffer wants packed u32s; alpha rides the high byte where supported.
        buf[i] = (a << 24) | (r << 16) | (g << 8) | b;
    }
    if let Err(e) = buf.present() {
        eprintln!("present error: {e:?}");
    }
}

/// Home screen hero: the featured poster with paging dots beneath it.
fn hero_frame(carousel: &CarouselState, theme: &Theme, w: u32, h: u32) -> Frame {
    let mut frame = Frame::new(w, h, theme.background);
    if carousel.is_empty() {
        return frame;
    }
    let (wf, hf) = (frame.width() as f32, frame.height() as f32);
    let hero = Rect::new(wf * 0.08, hf * 0.10, wf * 0.84, hf * 0.62);
    let name = showcase::CAROUSEL_POSTERS[carousel.index() % showcase::CAROUSEL_POSTERS.len()];
    frame.fill_rect(hero, poster_tint(name, theme.card));
    frame.stroke_rect(hero, 2.0, theme.card_edge);

    let dots = carousel.len();
    let spacing = 24.0;
    let x0 = wf / 2.0 - (dots as f32 - 1.0) * spacing / 2.0;
    for i in 0..dots {
        let color = if i == carousel.index() { theme.hover } else { theme.card_edge };
        frame.fill_rect(Rect::centered(x0 + i as f32 * spacing, hf * 0.78, 8.0, 8.0), color);
    }
    frame
}
