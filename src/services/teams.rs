//! Teams, team roles and memberships

use super::{PortalService, paths};
use crate::auth::{Actor, Capability};
use crate::core::models::{MemberAssignment, Team, TeamMember, TeamRole, TeamsOverview};
use crate::utils::InputValidator;
use crate::utils::error::{PortalError, Result};
use tracing::info;
use uuid::Uuid;

const TEAM_PATHS: &[&str] = &[paths::TEAMS, paths::ADMIN];

impl PortalService {
    /// Teams in display order with roles and members
    pub async fn teams_overview(&self) -> Result<TeamsOverview> {
        let db = self.storage.db();
        self.storage
            .cache()
            .get_or_load(paths::TEAMS, "overview", || async {
                Ok::<_, PortalError>(TeamsOverview {
                    teams: db.list_teams().await?,
                    roles: db.list_team_roles().await?,
                    members: db.list_team_members().await?,
                })
            })
            .await
    }

    pub async fn create_team(&self, actor: &Actor, name: &str) -> Result<Team> {
        let name = InputValidator::bounded(name, "Team name", 100)?;
        self.auth.require(actor, Capability::ManageTeams).await?;

        let team = self.storage.db().create_team(&name).await?;
        info!(actor = %actor.id, team = %team.id, "team created");

        self.invalidate(TEAM_PATHS);
        Ok(team)
    }

    pub async fn delete_team(&self, actor: &Actor, id: Uuid) -> Result<()> {
        self.auth.require(actor, Capability::ManageTeams).await?;

        self.storage.db().delete_team(id).await?;
        info!(actor = %actor.id, team = %id, "team deleted");

        self.invalidate(TEAM_PATHS);
        Ok(())
    }

    pub async fn create_team_role(&self, actor: &Actor, name: &str) -> Result<TeamRole> {
        let name = InputValidator::bounded(name, "Role name", 100)?;
        self.auth.require(actor, Capability::ManageTeams).await?;

        let role = self.storage.db().create_team_role(&name).await?;
        info!(actor = %actor.id, team_role = %role.id, "team role created");

        self.invalidate(TEAM_PATHS);
        Ok(role)
    }

    pub async fn delete_team_role(&self, actor: &Actor, id: Uuid) -> Result<()> {
        self.auth.require(actor, Capability::ManageTeams).await?;

        self.storage.db().delete_team_role(id).await?;
        info!(actor = %actor.id, team_role = %id, "team role deleted");

        self.invalidate(TEAM_PATHS);
        Ok(())
    }

    /// Add a user to a team, or change their role in it
    pub async fn assign_member(&self, actor: &Actor, assignment: &MemberAssignment) -> Result<TeamMember> {
        self.auth.require(actor, Capability::ManageTeams).await?;

        let member = self.storage.db().assign_team_member(assignment).await?;
        info!(
            actor = %actor.id,
            user = %assignment.user_id,
            team = %assignment.team_id,
            "team member assigned"
        );

        self.invalidate(TEAM_PATHS);
        Ok(member)
    }

    pub async fn remove_member(&self, actor: &Actor, member_id: Uuid) -> Result<()> {
        self.auth.require(actor, Capability::ManageTeams).await?;

        self.storage.db().remove_team_member(member_id).await?;
        info!(actor = %actor.id, member = %member_id, "team member removed");

        self.invalidate(TEAM_PATHS);
        Ok(())
    }
}
