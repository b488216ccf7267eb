//! SeaORM-based Lineup repository implementation
//!
//! CRUD over the `lineup` table. Channel hydration is delegated to a
//! [`LineupChannelProvider`] handed to the constructor; a hydration failure
//! fails the whole read instead of returning a lineup without channels.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set, TransactionTrait, Value,
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::database::repositories::traits::LineupChannelProvider;
use crate::entities::{lineup, prelude::Lineups};
use crate::errors::{LineupError, LineupResult};
use crate::models::{Lineup, LineupCreateRequest, LineupUpdateRequest};

/// SeaORM-based repository for Lineup operations
#[derive(Clone)]
pub struct LineupSeaOrmRepository {
    connection: Arc<DatabaseConnection>,
    channels: Arc<dyn LineupChannelProvider>,
}

impl LineupSeaOrmRepository {
    /// Create a new repository instance
    pub fn new(
        connection: Arc<DatabaseConnection>,
        channels: Arc<dyn LineupChannelProvider>,
    ) -> Self {
        Self {
            connection,
            channels,
        }
    }

    /// Insert a new lineup and return the row as stored
    pub async fn insert(&self, request: LineupCreateRequest) -> LineupResult<Lineup> {
        if let Err(e) = request.validate() {
            warn!("Rejected lineup '{}': {}", request.name, e);
            return Err(e);
        }

        let key = format!("device_uuid={}", request.device_uuid);
        let active_model = lineup::ActiveModel {
            id: NotSet,
            name: Set(request.name),
            ssdp: Set(request.ssdp),
            listen_address: Set(request.listen_address),
            discovery_address: Set(request.discovery_address),
            port: Set(request.port),
            tuners: Set(request.tuners),
            manufacturer: Set(request.manufacturer),
            model_name: Set(request.model_name),
            model_number: Set(request.model_number),
            firmware_name: Set(request.firmware_name),
            firmware_version: Set(request.firmware_version),
            device_id: Set(request.device_id),
            device_auth: Set(request.device_auth),
            device_uuid: Set(request.device_uuid),
            created_at: Set(Some(Utc::now())),
        };

        let result = Lineups::insert(active_model)
            .exec(&*self.connection)
            .await
            .map_err(storage_error("insert", &key))?;
        let id = result.last_insert_id;

        // Re-read so column defaults applied by the database are reflected
        let model = Lineups::find_by_id(id)
            .one(&*self.connection)
            .await
            .map_err(storage_error("insert", format!("id={id}")))?
            .ok_or(LineupError::NotFound { id })?;

        info!("Created lineup {} '{}' ({})", model.id, model.name, key);
        Ok(model.into())
    }

    /// Find a lineup by ID, optionally with its active channels
    pub async fn get_by_id(&self, id: i32, with_channels: bool) -> LineupResult<Lineup> {
        debug!("Loading lineup {} (with_channels={})", id, with_channels);

        let model = Lineups::find_by_id(id)
            .one(&*self.connection)
            .await
            .map_err(storage_error("get_by_id", format!("id={id}")))?
            .ok_or(LineupError::NotFound { id })?;

        let lineup = Lineup::from(model);
        if with_channels {
            self.hydrate(lineup).await
        } else {
            Ok(lineup)
        }
    }

    /// Find all lineups advertised over SSDP, ordered by ID
    pub async fn get_enabled(&self, with_channels: bool) -> LineupResult<Vec<Lineup>> {
        let models = Lineups::find()
            .filter(lineup::Column::Ssdp.eq(true))
            .order_by_asc(lineup::Column::Id)
            .all(&*self.connection)
            .await
            .map_err(storage_error("get_enabled", "ssdp=true"))?;

        debug!(
            "Found {} enabled lineups (with_channels={})",
            models.len(),
            with_channels
        );

        let mut lineups = Vec::with_capacity(models.len());
        for model in models {
            let lineup = Lineup::from(model);
            if with_channels {
                lineups.push(self.hydrate(lineup).await?);
            } else {
                lineups.push(lineup);
            }
        }
        Ok(lineups)
    }

    /// Find all lineups regardless of SSDP state, without channels
    pub async fn list_all(&self) -> LineupResult<Vec<Lineup>> {
        let models = Lineups::find()
            .order_by_asc(lineup::Column::Id)
            .all(&*self.connection)
            .await
            .map_err(storage_error("list_all", "*"))?;

        Ok(models.into_iter().map(Lineup::from).collect())
    }

    /// Find the lineup advertising `device_uuid`, if any
    pub async fn find_by_device_uuid(&self, device_uuid: &str) -> LineupResult<Option<Lineup>> {
        let model = Lineups::find()
            .filter(lineup::Column::DeviceUuid.eq(device_uuid))
            .one(&*self.connection)
            .await
            .map_err(storage_error(
                "find_by_device_uuid",
                format!("device_uuid={device_uuid}"),
            ))?;

        Ok(model.map(Lineup::from))
    }

    /// Delete a lineup, returning it as it was just before removal
    pub async fn delete(&self, id: i32) -> LineupResult<Lineup> {
        let key = format!("id={id}");
        let txn = self
            .connection
            .begin()
            .await
            .map_err(storage_error("delete", &key))?;

        let Some(model) = Lineups::find_by_id(id)
            .one(&txn)
            .await
            .map_err(storage_error("delete", &key))?
        else {
            txn.rollback().await.map_err(storage_error("delete", &key))?;
            warn!("Cannot delete lineup {}: not found", id);
            return Err(LineupError::NotFound { id });
        };

        Lineups::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(storage_error("delete", &key))?;
        txn.commit().await.map_err(storage_error("delete", &key))?;

        info!("Deleted lineup {} '{}'", model.id, model.name);
        Ok(model.into())
    }

    /// Update the fields present in `request`, leaving the rest untouched
    pub async fn update(&self, id: i32, request: LineupUpdateRequest) -> LineupResult<Lineup> {
        if let Err(e) = request.validate() {
            warn!("Rejected update for lineup {}: {}", id, e);
            return Err(e);
        }

        let key = format!("id={id}");
        let txn = self
            .connection
            .begin()
            .await
            .map_err(storage_error("update", &key))?;

        let Some(existing) = Lineups::find_by_id(id)
            .one(&txn)
            .await
            .map_err(storage_error("update", &key))?
        else {
            txn.rollback().await.map_err(storage_error("update", &key))?;
            warn!("Cannot update lineup {}: not found", id);
            return Err(LineupError::NotFound { id });
        };

        if request.is_empty() {
            txn.commit().await.map_err(storage_error("update", &key))?;
            debug!("No fields to update for lineup {}", id);
            return Ok(existing.into());
        }

        let mut active_model: lineup::ActiveModel = existing.into();
        set_if_present(&mut active_model.name, request.name);
        set_if_present(&mut active_model.ssdp, request.ssdp);
        set_if_present(&mut active_model.listen_address, request.listen_address);
        set_if_present(&mut active_model.discovery_address, request.discovery_address);
        set_if_present(&mut active_model.port, request.port);
        set_if_present(&mut active_model.tuners, request.tuners);
        set_if_present(&mut active_model.manufacturer, request.manufacturer);
        set_if_present(&mut active_model.model_name, request.model_name);
        set_if_present(&mut active_model.model_number, request.model_number);
        set_if_present(&mut active_model.firmware_name, request.firmware_name);
        set_if_present(&mut active_model.firmware_version, request.firmware_version);
        set_if_present(&mut active_model.device_id, request.device_id);
        set_if_present(&mut active_model.device_auth, request.device_auth);
        set_if_present(&mut active_model.device_uuid, request.device_uuid);

        // Zero rows touched means the lineup vanished after the read
        let updated = match active_model.update(&txn).await {
            Ok(model) => model,
            Err(DbErr::RecordNotUpdated) => {
                txn.rollback().await.map_err(storage_error("update", &key))?;
                warn!("Cannot update lineup {}: removed concurrently", id);
                return Err(LineupError::NotFound { id });
            }
            Err(e) => return Err(LineupError::storage("update", &key, e)),
        };
        txn.commit().await.map_err(storage_error("update", &key))?;

        info!("Updated lineup {} '{}'", updated.id, updated.name);
        Ok(updated.into())
    }

    /// Attach the lineup's active channels
    async fn hydrate(&self, mut lineup: Lineup) -> LineupResult<Lineup> {
        let channels = self
            .channels
            .get_channels_for_lineup(lineup.id, true)
            .await
            .map_err(|source| {
                error!("Failed to load channels for lineup {}: {}", lineup.id, source);
                LineupError::Collaborator {
                    lineup_id: lineup.id,
                    source,
                }
            })?;

        lineup.channels = Some(channels);
        Ok(lineup)
    }
}

fn storage_error<K: ToString>(
    operation: &'static str,
    key: K,
) -> impl FnOnce(DbErr) -> LineupError {
    move |source| LineupError::storage(operation, key, source)
}

fn set_if_present<V: Into<Value>>(slot: &mut ActiveValue<V>, value: Option<V>) {
    if let Some(value) = value {
        *slot = Set(value);
    }
}
