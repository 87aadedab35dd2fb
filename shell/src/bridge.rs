//! Bridge between the host message channel and the overlay controller.
//!
//! A single task owns the controller and serializes everything that touches
//! it: inbound host payloads, card clicks, and the startup color result.
//! The bridge holds the only subscription to the channel; dropping the
//! sender tears it down.

use std::time::Instant;

use tokio::sync::mpsc;

use ocular_core::{MenuController, MenuFrame, SelectionSink};
use ocular_types::HostEvent;

/// Everything the bridge loop reacts to.
#[derive(Debug, Clone)]
pub enum BridgeInput {
    /// A raw JSON payload from the host message channel.
    Host(serde_json::Value),
    /// The player clicked the card at this index of the current frame.
    Click(usize),
    /// Result of the startup theme-color fetch.
    MainColor(String),
}

/// Run the bridge until the input channel closes.
///
/// `on_frame` fires whenever the derived frame changes (`None` means the
/// overlay went blank). Malformed host payloads are dropped without touching
/// state. Returns the controller so callers can inspect the final state.
pub async fn run_menu_bridge<S, F>(
    mut rx: mpsc::Receiver<BridgeInput>,
    mut controller: MenuController<S>,
    mut on_frame: F,
) -> MenuController<S>
where
    S: SelectionSink,
    F: FnMut(Option<&MenuFrame>),
{
    let mut last_frame = controller.frame();

    while let Some(input) = rx.recv().await {
        match input {
            BridgeInput::Host(payload) => {
                match serde_json::from_value::<HostEvent>(payload) {
                    Ok(event) => controller.handle_event(event),
                    Err(err) => {
                        tracing::trace!("ignoring malformed host payload: {err}");
                        continue;
                    }
                }
            }
            BridgeInput::Click(index) => {
                let Some(action) = last_frame
                    .as_ref()
                    .and_then(|frame| frame.cards.get(index))
                    .map(|card| card.action.clone())
                else {
                    continue;
                };
                controller.activate(&action, Instant::now());
            }
            BridgeInput::MainColor(color) => controller.set_main_color(color),
        }

        let frame = controller.frame();
        if frame != last_frame {
            on_frame(frame.as_ref());
            last_frame = frame;
        }
    }

    controller
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use serde_json::json;

    use super::*;
    use ocular_types::Selection;

    #[derive(Clone, Default)]
    struct RecordingSink(Arc<Mutex<Vec<Selection>>>);

    impl SelectionSink for RecordingSink {
        fn send_select(&self, selection: Selection) {
            self.0.lock().unwrap().push(selection);
        }
    }

    type Frames = Arc<Mutex<Vec<Option<MenuFrame>>>>;

    fn spawn_bridge() -> (
        mpsc::Sender<BridgeInput>,
        tokio::task::JoinHandle<MenuController<RecordingSink>>,
        RecordingSink,
        Frames,
    ) {
        let sink = RecordingSink::default();
        let controller = MenuController::new(sink.clone(), Duration::from_millis(100));
        let (tx, rx) = mpsc::channel(16);
        let frames: Frames = Arc::default();
        let collector = Arc::clone(&frames);
        let bridge = tokio::spawn(run_menu_bridge(rx, controller, move |frame| {
            collector.lock().unwrap().push(frame.cloned());
        }));
        (tx, bridge, sink, frames)
    }

    #[tokio::test]
    async fn test_select_round_trip_emits_exactly_one_request() {
        let (tx, bridge, sink, _frames) = spawn_bridge();

        tx.send(BridgeInput::Host(json!({"event": "visible", "state": true})))
            .await
            .unwrap();
        tx.send(BridgeInput::Host(json!({
            "event": "setTarget",
            "options": {"menu": [{"label": "Open", "icon": "fa-door"}]}
        })))
        .await
        .unwrap();
        tx.send(BridgeInput::Click(0)).await.unwrap();
        drop(tx);
        bridge.await.unwrap();

        let sent = sink.0.lock().unwrap();
        assert_eq!(*sent, [Selection::option("menu", 1)]);
        assert_eq!(
            serde_json::to_string(&sent[0]).unwrap(),
            r#"["menu",1,null]"#
        );
    }

    #[tokio::test]
    async fn test_hiding_emits_a_blank_frame() {
        let (tx, bridge, _sink, frames) = spawn_bridge();

        tx.send(BridgeInput::Host(json!({"event": "visible", "state": true})))
            .await
            .unwrap();
        tx.send(BridgeInput::Host(json!({"event": "visible", "state": false})))
            .await
            .unwrap();
        drop(tx);
        bridge.await.unwrap();

        let frames = frames.lock().unwrap();
        assert!(frames.first().unwrap().is_some());
        assert!(frames.last().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_malformed_payloads_leave_state_untouched() {
        let (tx, bridge, _sink, frames) = spawn_bridge();

        tx.send(BridgeInput::Host(json!({"event": "visible", "state": true})))
            .await
            .unwrap();
        tx.send(BridgeInput::Host(json!({"event": "explode"}))).await.unwrap();
        tx.send(BridgeInput::Host(json!("not even an object"))).await.unwrap();
        drop(tx);
        let controller = bridge.await.unwrap();

        assert!(controller.state().visible);
        assert_eq!(frames.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_color_update_recolors_the_frame() {
        let (tx, bridge, _sink, _frames) = spawn_bridge();

        tx.send(BridgeInput::Host(json!({"event": "visible", "state": true})))
            .await
            .unwrap();
        tx.send(BridgeInput::MainColor("#112233".to_string())).await.unwrap();
        drop(tx);
        let controller = bridge.await.unwrap();

        assert_eq!(controller.state().main_color, "#112233");
    }

    #[tokio::test]
    async fn test_click_outside_the_frame_is_ignored() {
        let (tx, bridge, sink, _frames) = spawn_bridge();

        tx.send(BridgeInput::Click(3)).await.unwrap();
        drop(tx);
        bridge.await.unwrap();

        assert!(sink.0.lock().unwrap().is_empty());
    }
}
