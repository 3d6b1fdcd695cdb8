//! Domain-layer bodies: model, repository contract, use case.

pub(super) const MODEL: &str = r#"class {{FEATURE_PASCAL}}Model {
  // TODO: Define properties here. Example:
  final int id;

  {{FEATURE_PASCAL}}Model({
    // TODO: Define properties here. Example:
    required this.id,
  });
}
"#;

pub(super) const REPOSITORY: &str = r#"import 'package:{{APP_NAME}}/features/{{FEATURE_SNAKE}}/domain/entities/{{FEATURE_SNAKE}}_model.dart';

//TODO: Must register Repository class in DI
abstract class {{FEATURE_PASCAL}}Repository {
  Future<{{FEATURE_PASCAL}}Model> get{{FEATURE_PASCAL}}();
}
"#;

pub(super) const USECASE: &str = r#"import 'package:{{APP_NAME}}/features/{{FEATURE_SNAKE}}/domain/repository/{{FEATURE_SNAKE}}_repository.dart';
import 'package:{{APP_NAME}}/features/{{FEATURE_SNAKE}}/domain/entities/{{FEATURE_SNAKE}}_model.dart';

//TODO: Must register UseCase class in DI
class {{FEATURE_PASCAL}}UseCase {
  final {{FEATURE_PASCAL}}Repository _repository;

  {{FEATURE_PASCAL}}UseCase(this._repository);

  Future<{{FEATURE_PASCAL}}Model> execute() {
    return _repository.get{{FEATURE_PASCAL}}();
  }
}
"#;
