use std::sync::mpsc::Sender;

use tracing::trace;

use super::types::Snapshot;

/// 快照的输出口。仿真核心只通过它把快照交出去，不关心对方如何渲染。
pub trait SnapshotSink {
    fn emit(&mut self, snapshot: &Snapshot);
}

/// 一个简单的快照收集器（存内存，仿真结束后可写 JSON 文件）
#[derive(Debug, Default)]
pub struct SnapshotLog {
    pub snapshots: Vec<Snapshot>,
}

impl SnapshotSink for SnapshotLog {
    fn emit(&mut self, snapshot: &Snapshot) {
        self.snapshots.push(snapshot.clone());
    }
}

impl<F> SnapshotSink for F
where
    F: FnMut(&Snapshot),
{
    fn emit(&mut self, snapshot: &Snapshot) {
        (self)(snapshot)
    }
}

/// 队列形式的输出口。接收端已关闭时丢弃快照，不影响仿真。
impl SnapshotSink for Sender<Snapshot> {
    fn emit(&mut self, snapshot: &Snapshot) {
        if self.send(snapshot.clone()).is_err() {
            trace!(run = snapshot.run, step = snapshot.step, "快照接收端已关闭，丢弃快照");
        }
    }
}
