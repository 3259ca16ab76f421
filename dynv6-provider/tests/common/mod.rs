//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use dynv6_provider::{
    Dynv6Client, Dynv6Config, Dynv6Provider, ProviderError, ProviderRecord, Record, RecordData,
    Result, Zone, ZoneClient,
};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

pub const TEST_ZONE: &str = "example.dynv6.net";
pub const TEST_ZONE_ID: i64 = 77;

/// 生成唯一的测试记录名称
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

pub fn a_record(name: &str, address: &str) -> Record {
    Record::new(
        name,
        Duration::from_secs(300),
        RecordData::A {
            address: address.to_string(),
        },
    )
}

pub fn txt_record(name: &str, text: &str) -> Record {
    Record::new(
        name,
        Duration::from_secs(60),
        RecordData::TXT {
            text: text.to_string(),
        },
    )
}

pub fn wire_record(id: i64, name: &str, record_type: &str, data: &str) -> ProviderRecord {
    ProviderRecord {
        id: Some(id),
        name: name.to_string(),
        record_type: record_type.to_string(),
        data: data.to_string(),
        ttl: Some(300),
        zone_id: Some(TEST_ZONE_ID),
        ..ProviderRecord::default()
    }
}

pub fn mx_record(name: &str, priority: u16, exchange: &str) -> Record {
    Record::new(
        name,
        Duration::from_secs(300),
        RecordData::MX {
            priority,
            exchange: exchange.to_string(),
        },
    )
}

pub fn srv_record(name: &str, port: u16, target: &str) -> Record {
    Record::new(
        name,
        Duration::from_secs(300),
        RecordData::SRV {
            priority: 10,
            weight: 5,
            port,
            target: target.to_string(),
        },
    )
}

pub fn caa_record(name: &str, tag: &str, value: &str) -> Record {
    Record::new(
        name,
        Duration::from_secs(300),
        RecordData::CAA {
            flags: 0,
            tag: tag.to_string(),
            value: value.to_string(),
        },
    )
}

#[derive(Default)]
struct ZoneState {
    records: Vec<ProviderRecord>,
    next_id: i64,
    creates: usize,
    fail_create_at: Option<usize>,
    updates: usize,
    fail_update_at: Option<usize>,
    calls: Vec<String>,
}

/// In-memory stand-in for the dynv6 API holding a single zone.
pub struct MemoryZoneClient {
    zone: Zone,
    state: Mutex<ZoneState>,
}

impl MemoryZoneClient {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<ProviderRecord>) -> Self {
        let next_id = records.iter().filter_map(|r| r.id).max().unwrap_or(1000) + 1;
        Self {
            zone: Zone {
                id: TEST_ZONE_ID,
                name: TEST_ZONE.to_string(),
                ipv4address: None,
                ipv6prefix: None,
                created_at: None,
                updated_at: None,
            },
            state: Mutex::new(ZoneState {
                records,
                next_id,
                ..ZoneState::default()
            }),
        }
    }

    /// The `n`th create call (0-based) fails with a network error.
    pub fn fail_create_at(self, n: usize) -> Self {
        self.state.lock().unwrap().fail_create_at = Some(n);
        self
    }

    /// The `n`th update call (0-based) fails with a timeout.
    pub fn fail_update_at(self, n: usize) -> Self {
        self.state.lock().unwrap().fail_update_at = Some(n);
        self
    }

    pub fn records(&self) -> Vec<ProviderRecord> {
        self.state.lock().unwrap().records.clone()
    }

    /// Remote calls in order, e.g. `"create www"`, `"update 1"`, `"delete 2"`.
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    fn not_found(record: impl ToString) -> ProviderError {
        ProviderError::RecordNotFound {
            provider: "memory".to_string(),
            record: record.to_string(),
            raw_message: None,
        }
    }
}

#[async_trait]
impl ZoneClient for MemoryZoneClient {
    fn provider_name(&self) -> &'static str {
        "memory"
    }

    async fn resolve_zone(&self, name: &str) -> Result<Zone> {
        if name.trim_end_matches('.') == self.zone.name {
            Ok(self.zone.clone())
        } else {
            Err(ProviderError::ZoneNotFound {
                provider: "memory".to_string(),
                zone: name.to_string(),
                raw_message: None,
            })
        }
    }

    async fn list_records(&self, _zone_id: i64) -> Result<Vec<ProviderRecord>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("list".to_string());
        Ok(state.records.clone())
    }

    async fn create_record(&self, zone_id: i64, record: &ProviderRecord) -> Result<ProviderRecord> {
        let mut state = self.state.lock().unwrap();
        let attempt = state.creates;
        state.creates += 1;
        if state.fail_create_at == Some(attempt) {
            return Err(ProviderError::NetworkError {
                provider: "memory".to_string(),
                detail: "connection reset".to_string(),
            });
        }

        let mut created = record.clone();
        created.id = Some(state.next_id);
        created.zone_id = Some(zone_id);
        state.next_id += 1;
        state.calls.push(format!("create {}", created.name));
        state.records.push(created.clone());
        Ok(created)
    }

    async fn update_record(&self, _zone_id: i64, record: &ProviderRecord) -> Result<ProviderRecord> {
        let mut state = self.state.lock().unwrap();
        let Some(id) = record.id else {
            return Err(Self::not_found("<no id>"));
        };
        let attempt = state.updates;
        state.updates += 1;
        if state.fail_update_at == Some(attempt) {
            return Err(ProviderError::Timeout {
                provider: "memory".to_string(),
                detail: "request timed out".to_string(),
            });
        }
        state.calls.push(format!("update {id}"));
        let slot = state
            .records
            .iter_mut()
            .find(|r| r.id == Some(id))
            .ok_or_else(|| Self::not_found(id))?;
        *slot = record.clone();
        Ok(slot.clone())
    }

    async fn delete_record(&self, _zone_id: i64, record_id: i64) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("delete {record_id}"));
        let before = state.records.len();
        state.records.retain(|r| r.id != Some(record_id));
        if state.records.len() == before {
            return Err(Self::not_found(record_id));
        }
        Ok(())
    }
}

/// 测试上下文 - 封装真实 dynv6 provider 和测试区域
pub struct TestContext {
    pub provider: Dynv6Provider,
    pub zone: String,
}

impl TestContext {
    /// 从环境变量创建 dynv6 测试上下文
    pub fn dynv6() -> Option<Self> {
        let config = Dynv6Config::from_env().ok()?;
        let zone = env::var("TEST_ZONE").ok()?;
        let client = Dynv6Client::from_config(&config).ok()?;
        Some(Self {
            provider: Dynv6Provider::new(client),
            zone,
        })
    }

    /// 删除区域中所有以 `_test-` 开头的残留记录
    pub async fn cleanup_all_test_records(&self) {
        let client = self.provider.client();
        let Ok(zone) = client.resolve_zone(&self.zone).await else {
            return;
        };
        let Ok(records) = client.list_records(zone.id).await else {
            return;
        };
        for record in records.iter().filter(|r| r.name.starts_with("_test-")) {
            if let Some(id) = record.id
                && client.delete_record(zone.id, id).await.is_ok()
            {
                println!("  ⚠ 清理残留记录: {} ({id})", record.name);
            }
        }
    }
}
