use crate::domain::model::CampaignPayload;
use std::sync::RwLock;

/// 保存最近一次成功計算的結果，供失敗時回傳舊值
///
/// 只存放新鮮的結果；`stale` 標記在讀取時才加上，
/// 所以連續失敗永遠回傳同一份最後成功的數值。
#[derive(Debug, Default)]
pub struct FreshnessCache {
    slot: RwLock<Option<CampaignPayload>>,
}

impl FreshnessCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<CampaignPayload> {
        self.slot
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// 覆寫目前的值，後寫者勝；`stale` 的結果一律拒收
    pub fn put(&self, payload: CampaignPayload) {
        if payload.stale {
            tracing::warn!("Refusing to cache a stale payload");
            return;
        }
        *self
            .slot
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(payload);
    }

    /// 有快取時回傳標記為過期的副本，否則 `None`
    pub fn substitute(&self, note: &str) -> Option<CampaignPayload> {
        self.get().map(|payload| CampaignPayload {
            stale: true,
            note: Some(note.to_string()),
            ..payload
        })
    }
}
