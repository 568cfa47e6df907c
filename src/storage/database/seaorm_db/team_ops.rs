use crate::core::models::{MemberAssignment, Team, TeamMember, TeamRole, TeamSummary, sort_teams};
use crate::utils::error::{PortalError, Result};
use sea_orm::*;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

use super::super::entities::{self, team, team_member, team_role};
use super::types::{SeaOrmDatabase, write_error};

impl SeaOrmDatabase {
    /// Teams with member counts, in display order
    pub async fn list_teams(&self) -> Result<Vec<TeamSummary>> {
        let teams = entities::Team::find().all(&self.db).await?;

        let mut counts: HashMap<Uuid, u64> = HashMap::new();
        for member in entities::TeamMember::find().all(&self.db).await? {
            *counts.entry(member.team_id).or_default() += 1;
        }

        let mut summaries: Vec<TeamSummary> = teams
            .iter()
            .map(|t| TeamSummary {
                team: t.to_domain(),
                member_count: counts.get(&t.id).copied().unwrap_or(0),
            })
            .collect();
        sort_teams(&mut summaries);

        Ok(summaries)
    }

    pub async fn list_team_roles(&self) -> Result<Vec<TeamRole>> {
        let roles = entities::TeamRole::find()
            .order_by_asc(team_role::Column::Name)
            .all(&self.db)
            .await?;
        Ok(roles.iter().map(team_role::Model::to_domain).collect())
    }

    /// Memberships with the member's display name
    pub async fn list_team_members(&self) -> Result<Vec<TeamMember>> {
        let rows = entities::TeamMember::find()
            .find_also_related(entities::User)
            .order_by_asc(team_member::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(m, user)| m.to_domain(user.map(|u| u.name)))
            .collect())
    }

    pub async fn create_team(&self, name: &str) -> Result<Team> {
        let model = team::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            created_at: Set(chrono::Utc::now().into()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| write_error(e, "A team with this name already exists"))?;

        Ok(model.to_domain())
    }

    /// Delete a team and its memberships
    pub async fn delete_team(&self, id: Uuid) -> Result<()> {
        let txn = self.db.begin().await?;

        let removed = entities::TeamMember::delete_many()
            .filter(team_member::Column::TeamId.eq(id))
            .exec(&txn)
            .await?;
        debug!("Removed {} members of team {}", removed.rows_affected, id);

        entities::VolunteerApplication::delete_many()
            .filter(entities::volunteer_application::Column::TeamId.eq(id))
            .exec(&txn)
            .await?;

        let result = entities::Team::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            return Err(PortalError::not_found("Team not found"));
        }

        txn.commit().await?;
        Ok(())
    }

    pub async fn create_team_role(&self, name: &str) -> Result<TeamRole> {
        let model = team_role::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            created_at: Set(chrono::Utc::now().into()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| write_error(e, "A team role with this name already exists"))?;

        Ok(model.to_domain())
    }

    /// Delete a team role and every membership holding it
    pub async fn delete_team_role(&self, id: Uuid) -> Result<()> {
        let txn = self.db.begin().await?;

        let removed = entities::TeamMember::delete_many()
            .filter(team_member::Column::RoleId.eq(id))
            .exec(&txn)
            .await?;
        debug!("Removed {} members holding role {}", removed.rows_affected, id);

        let result = entities::TeamRole::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            return Err(PortalError::not_found("Team role not found"));
        }

        txn.commit().await?;
        Ok(())
    }

    /// Put a user in a team with a role, replacing the role if already a member
    pub async fn assign_team_member(&self, assignment: &MemberAssignment) -> Result<TeamMember> {
        let txn = self.db.begin().await?;

        if entities::User::find_by_id(assignment.user_id).one(&txn).await?.is_none() {
            return Err(PortalError::not_found("User not found"));
        }
        if entities::Team::find_by_id(assignment.team_id).one(&txn).await?.is_none() {
            return Err(PortalError::not_found("Team not found"));
        }
        if entities::TeamRole::find_by_id(assignment.role_id)
            .one(&txn)
            .await?
            .is_none()
        {
            return Err(PortalError::not_found("Team role not found"));
        }

        let existing = entities::TeamMember::find()
            .filter(team_member::Column::UserId.eq(assignment.user_id))
            .filter(team_member::Column::TeamId.eq(assignment.team_id))
            .one(&txn)
            .await?;

        let model = match existing {
            Some(member) => {
                let mut active_model: team_member::ActiveModel = member.into();
                active_model.role_id = Set(assignment.role_id);
                active_model.update(&txn).await?
            }
            None => {
                team_member::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    user_id: Set(assignment.user_id),
                    team_id: Set(assignment.team_id),
                    role_id: Set(assignment.role_id),
                    created_at: Set(chrono::Utc::now().into()),
                }
                .insert(&txn)
                .await?
            }
        };

        txn.commit().await?;
        Ok(model.to_domain(None))
    }

    /// Whether the user belongs to at least one team
    pub async fn is_team_member(&self, user_id: Uuid) -> Result<bool> {
        let count = entities::TeamMember::find()
            .filter(team_member::Column::UserId.eq(user_id))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    pub async fn remove_team_member(&self, member_id: Uuid) -> Result<()> {
        let result = entities::TeamMember::delete_by_id(member_id)
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(PortalError::not_found("Team member not found"));
        }
        Ok(())
    }
}
