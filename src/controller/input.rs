//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{ActivePane, DetailState};
use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let model = self.model.lock().await;

        // Handle help popup first (blocks all other interactions)
        if model.is_help_popup_open().await {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') => {
                    model.hide_help_popup().await;
                    Ok(())
                }
                _ => Ok(()),
            };
        }

        let ui_state = model.get_ui_state().await;

        // Search bar: characters edit the query, every edit re-triggers the
        // search (or resets it when the query becomes empty)
        if ui_state.active_pane == ActivePane::Search {
            match key.code {
                KeyCode::Tab => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        model.cycle_pane_backward().await;
                    } else {
                        model.cycle_pane_forward().await;
                    }
                    return Ok(());
                }
                KeyCode::BackTab => {
                    model.cycle_pane_backward().await;
                    return Ok(());
                }
                KeyCode::Enter => {
                    model.set_active_pane(ActivePane::Results).await;
                    return Ok(());
                }
                KeyCode::Esc => {
                    model.clear_query().await;
                    drop(model);
                    self.on_query_changed(String::new()).await;
                    return Ok(());
                }
                KeyCode::Backspace => {
                    let query = model.backspace_query().await;
                    drop(model);
                    self.on_query_changed(query).await;
                    return Ok(());
                }
                KeyCode::Char(c) => {
                    if (c == 'q' || c == 'Q') && key.modifiers.contains(KeyModifiers::CONTROL) {
                        model.set_should_quit(true).await;
                        return Ok(());
                    }
                    let query = model.append_to_query(c).await;
                    drop(model);
                    self.on_query_changed(query).await;
                    return Ok(());
                }
                _ => {}
            }
        }

        // Results pane navigation
        if ui_state.active_pane == ActivePane::Results {
            match key.code {
                KeyCode::Up => {
                    model.results_move_up().await;
                    return Ok(());
                }
                KeyCode::Down => {
                    model.results_move_down().await;
                    return Ok(());
                }
                KeyCode::Enter => {
                    drop(model);
                    self.open_selected_movie().await;
                    return Ok(());
                }
                _ => {}
            }
        }

        // Side pane: movie detail (rate/add/delete) or watched list
        if ui_state.active_pane == ActivePane::Side {
            let detail = model.get_detail_state().await;
            match detail {
                DetailState::Shown { .. } => {
                    let is_watched = model.is_selected_watched().await;
                    match key.code {
                        KeyCode::Left if !is_watched => {
                            model.rating_cursor_left().await;
                            return Ok(());
                        }
                        KeyCode::Right if !is_watched => {
                            model.rating_cursor_right().await;
                            return Ok(());
                        }
                        KeyCode::Enter if !is_watched => {
                            model.rating_commit().await;
                            return Ok(());
                        }
                        KeyCode::Char('a') | KeyCode::Char('A') if !is_watched => {
                            drop(model);
                            self.add_watched().await;
                            return Ok(());
                        }
                        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete
                            if is_watched =>
                        {
                            if let Some(id) = model.get_selected_id().await {
                                drop(model);
                                self.delete_watched(&id).await;
                            }
                            return Ok(());
                        }
                        KeyCode::Esc | KeyCode::Backspace => {
                            // First Esc acts as hover-out, second goes back
                            if model.rating_is_previewing().await {
                                model.rating_clear_preview().await;
                            } else {
                                model.clear_selection().await;
                            }
                            return Ok(());
                        }
                        _ => {}
                    }
                }
                DetailState::Loading | DetailState::Error(_) => {
                    if let KeyCode::Esc | KeyCode::Backspace = key.code {
                        model.clear_selection().await;
                        return Ok(());
                    }
                }
                DetailState::Hidden => match key.code {
                    KeyCode::Up => {
                        model.watched_move_up().await;
                        return Ok(());
                    }
                    KeyCode::Down => {
                        model.watched_move_down().await;
                        return Ok(());
                    }
                    KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
                        if let Some(id) = model.get_selected_watched_id().await {
                            drop(model);
                            self.delete_watched(&id).await;
                        }
                        return Ok(());
                    }
                    _ => {}
                },
            }
        }

        // Global keybindings
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                model.set_should_quit(true).await;
            }
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    model.cycle_pane_backward().await;
                } else {
                    model.cycle_pane_forward().await;
                }
            }
            KeyCode::BackTab => {
                model.cycle_pane_backward().await;
            }
            // Focus search
            KeyCode::Char('/') => {
                model.set_active_pane(ActivePane::Search).await;
            }
            // Collapse/expand the two content panes
            KeyCode::Char('1') => {
                model.toggle_results_pane().await;
            }
            KeyCode::Char('2') => {
                model.toggle_side_pane().await;
            }
            // Show help popup
            KeyCode::Char('h') | KeyCode::Char('H') => {
                model.show_help_popup().await;
            }
            _ => {}
        }
        Ok(())
    }
}
