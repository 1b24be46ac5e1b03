use crate::error::RoutinelyError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use routinely_api_structs::get_habits_by_user::*;
use routinely_domain::{Habit, ID};
use routinely_infra::Context;

pub async fn get_habits_by_user_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, RoutinelyError> {
    let usecase = GetHabitsByUserUseCase {
        user_id: path_params.user_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|habits| HttpResponse::Ok().json(APIResponse::new(habits)))
        .map_err(RoutinelyError::from)
}

#[derive(Debug)]
pub struct GetHabitsByUserUseCase {
    pub user_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for RoutinelyError {
    fn from(_: UseCaseError) -> Self {
        Self::InternalError
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetHabitsByUserUseCase {
    type Response = Vec<Habit>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetHabitsByUser";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        Ok(ctx.repos.habits.find_by_user(&self.user_id).await)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use routinely_domain::HabitKind;
    use routinely_infra::setup_context;

    #[actix_web::test]
    async fn lists_only_the_users_habits() {
        let ctx = setup_context().await;
        let user_id = ID::new();
        let habit = Habit::new(user_id.clone(), "Stretch".into(), HabitKind::Good, 0);
        let other = Habit::new(ID::new(), "Jog".into(), HabitKind::Good, 0);
        ctx.repos.habits.insert(&habit).await.unwrap();
        ctx.repos.habits.insert(&other).await.unwrap();

        let mut usecase = GetHabitsByUserUseCase { user_id };

        let res = usecase.execute(&ctx).await.expect("To list habits");
        assert_eq!(res, vec![habit]);
    }
}
