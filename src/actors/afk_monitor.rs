use actix::{Actor, AsyncContext, Context, Handler, Message, Recipient, SpawnHandle};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info};

use crate::afk::{classify, AfkAction, VoicePresence};

/// Message reporting a member's voice state change
#[derive(Message)]
#[rtype(result = "()")]
pub struct VoiceStateChanged {
    pub guild_id: u64,
    pub user_id: u64,
    pub before: Option<VoicePresence>,
    pub after: VoicePresence,
}

/// Sent when a member has stayed self-deafened for the whole timeout
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
#[rtype(result = "()")]
pub struct AfkExpired {
    pub guild_id: u64,
    pub user_id: u64,
}

/// Actor that keeps one countdown per self-deafened member
pub struct AfkMonitorActor {
    timeout: Duration,
    pending: HashMap<u64, SpawnHandle>,
    on_expired: Recipient<AfkExpired>,
}

impl AfkMonitorActor {
    pub fn new(timeout: Duration, on_expired: Recipient<AfkExpired>) -> Self {
        Self {
            timeout,
            pending: HashMap::new(),
            on_expired,
        }
    }
}

impl Actor for AfkMonitorActor {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Context<Self>) {
        info!("AfkMonitorActor started with {:?} timeout", self.timeout);
    }
}

impl Handler<VoiceStateChanged> for AfkMonitorActor {
    type Result = ();

    fn handle(&mut self, msg: VoiceStateChanged, ctx: &mut Context<Self>) -> Self::Result {
        let user_id = msg.user_id;

        match classify(msg.before, msg.after) {
            AfkAction::Arm => {
                if self.pending.contains_key(&user_id) {
                    return;
                }

                debug!("User {} deafened, starting AFK countdown", user_id);
                let expired = AfkExpired {
                    guild_id: msg.guild_id,
                    user_id,
                };
                let handle = ctx.run_later(self.timeout, move |act, _ctx| {
                    act.pending.remove(&user_id);
                    info!("User {} has been deafened for {:?}", user_id, act.timeout);
                    act.on_expired.do_send(expired);
                });
                self.pending.insert(user_id, handle);
            }
            AfkAction::Disarm => {
                if let Some(handle) = self.pending.remove(&user_id) {
                    debug!("Cancelling AFK countdown for user {}", user_id);
                    ctx.cancel_future(handle);
                }
            }
            AfkAction::Ignore => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    const TIMEOUT: Duration = Duration::from_millis(50);

    struct Recorder(Arc<Mutex<Vec<AfkExpired>>>);

    impl Actor for Recorder {
        type Context = Context<Self>;
    }

    impl Handler<AfkExpired> for Recorder {
        type Result = ();

        fn handle(&mut self, msg: AfkExpired, _ctx: &mut Context<Self>) {
            self.0.lock().unwrap().push(msg);
        }
    }

    fn start_monitor() -> (actix::Addr<AfkMonitorActor>, Arc<Mutex<Vec<AfkExpired>>>) {
        let expired = Arc::new(Mutex::new(Vec::new()));
        let recorder = Recorder(expired.clone()).start();
        let monitor = AfkMonitorActor::new(TIMEOUT, recorder.recipient()).start();
        (monitor, expired)
    }

    fn change(user_id: u64, before_deaf: bool, after_deaf: bool) -> VoiceStateChanged {
        VoiceStateChanged {
            guild_id: 10,
            user_id,
            before: Some(VoicePresence {
                channel_id: Some(20),
                self_deaf: before_deaf,
            }),
            after: VoicePresence {
                channel_id: Some(20),
                self_deaf: after_deaf,
            },
        }
    }

    #[actix_rt::test]
    async fn test_countdown_expires() {
        let (monitor, expired) = start_monitor();

        monitor.send(change(1, false, true)).await.unwrap();
        actix_rt::time::sleep(TIMEOUT * 4).await;

        assert_eq!(
            *expired.lock().unwrap(),
            vec![AfkExpired {
                guild_id: 10,
                user_id: 1
            }]
        );
    }

    #[actix_rt::test]
    async fn test_undeafen_cancels_countdown() {
        let (monitor, expired) = start_monitor();

        monitor.send(change(1, false, true)).await.unwrap();
        monitor.send(change(1, true, false)).await.unwrap();
        actix_rt::time::sleep(TIMEOUT * 4).await;

        assert!(expired.lock().unwrap().is_empty());
    }

    #[actix_rt::test]
    async fn test_repeated_deafen_keeps_one_countdown() {
        let (monitor, expired) = start_monitor();

        monitor.send(change(1, false, true)).await.unwrap();
        monitor.send(change(1, false, true)).await.unwrap();
        monitor.send(change(2, false, true)).await.unwrap();
        actix_rt::time::sleep(TIMEOUT * 4).await;

        let mut users: Vec<u64> = expired.lock().unwrap().iter().map(|e| e.user_id).collect();
        users.sort_unstable();
        assert_eq!(users, vec![1, 2]);
    }
}
