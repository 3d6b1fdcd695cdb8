//! Data-layer bodies: persistence, transfer objects, network, repository impl.

pub(super) const DATA_STORE: &str = r#"import 'package:shared_preferences/shared_preferences.dart';

//TODO: Register data store in dependency injection
class {{FEATURE_PASCAL}}DataStore {
  final SharedPreferences _prefs;

  {{FEATURE_PASCAL}}DataStore(this._prefs);

  Future<void> setBool(String key, bool value) async {
    await _prefs.setBool(key, value);
  }

  bool? getBool(String key) {
    return _prefs.getBool(key);
  }

  Future<void> setString(String key, String value) async {
    await _prefs.setString(key, value);
  }

  String? getString(String key) {
    return _prefs.getString(key);
  }

  Future<void> setInt(String key, int value) async {
    await _prefs.setInt(key, value);
  }

  int? getInt(String key) {
    return _prefs.getInt(key);
  }

  Future<void> setDouble(String key, double value) async {
    await _prefs.setDouble(key, value);
  }

  double? getDouble(String key) {
    return _prefs.getDouble(key);
  }

  //======================================
  // Never save large lists here. Large lists in preferences cause performance
  // issues; use a database for objects or large collections.
  //======================================
  Future<void> setStringList(String key, List<String> value) async {
    await _prefs.setStringList(key, value);
  }

  List<String>? getStringList(String key) {
    return _prefs.getStringList(key);
  }
}
"#;

pub(super) const REQUEST: &str = r#"import 'package:json_annotation/json_annotation.dart';

part '{{FEATURE_SNAKE}}_request.g.dart';

@JsonSerializable()
class {{FEATURE_PASCAL}}Request {
  final int id;

  {{FEATURE_PASCAL}}Request({required this.id});

  factory {{FEATURE_PASCAL}}Request.fromJson(Map<String, dynamic> json) =>
      _${{FEATURE_PASCAL}}RequestFromJson(json);

  Map<String, dynamic> toJson() => _${{FEATURE_PASCAL}}RequestToJson(this);
}
"#;

pub(super) const RESPONSE: &str = r#"import 'package:{{APP_NAME}}/features/{{FEATURE_SNAKE}}/domain/entities/{{FEATURE_SNAKE}}_model.dart';
import 'package:json_annotation/json_annotation.dart';

part '{{FEATURE_SNAKE}}_response.g.dart';

@JsonSerializable()
class {{FEATURE_PASCAL}}Response {
  final int id;

  {{FEATURE_PASCAL}}Response({required this.id});

  factory {{FEATURE_PASCAL}}Response.fromJson(Map<String, dynamic> json) =>
      _${{FEATURE_PASCAL}}ResponseFromJson(json);

  Map<String, dynamic> toJson() => _${{FEATURE_PASCAL}}ResponseToJson(this);

  {{FEATURE_PASCAL}}Model toDomain() {
    return {{FEATURE_PASCAL}}Model(id: id);
  }
}
"#;

pub(super) const API: &str = r#"import 'package:dio/dio.dart';

//TODO: Register class in Api Module
class {{FEATURE_PASCAL}}Api {
  final Dio _dio;

  {{FEATURE_PASCAL}}Api(this._dio);

  Future<Response> get{{FEATURE_PASCAL}}Data() async {
    return await _dio.get('/{{FEATURE_SNAKE}}');
  }
}
"#;

pub(super) const REPOSITORY_IMPL: &str = r#"import 'package:{{APP_NAME}}/features/{{FEATURE_SNAKE}}/domain/entities/{{FEATURE_SNAKE}}_model.dart';
import 'package:{{APP_NAME}}/features/{{FEATURE_SNAKE}}/data/entities/{{FEATURE_SNAKE}}_response.dart';
import 'package:{{APP_NAME}}/features/{{FEATURE_SNAKE}}/data/network/{{FEATURE_SNAKE}}_api.dart';
import 'package:{{APP_NAME}}/features/{{FEATURE_SNAKE}}/domain/repository/{{FEATURE_SNAKE}}_repository.dart';

class {{FEATURE_PASCAL}}RepositoryImpl implements {{FEATURE_PASCAL}}Repository {
  final {{FEATURE_PASCAL}}Api _api;

  {{FEATURE_PASCAL}}RepositoryImpl(this._api);

  @override
  Future<{{FEATURE_PASCAL}}Model> get{{FEATURE_PASCAL}}() async {
    final response = await _api.get{{FEATURE_PASCAL}}Data();
    final {{FEATURE_SNAKE}}Response = {{FEATURE_PASCAL}}Response.fromJson(response.data);
    return {{FEATURE_SNAKE}}Response.toDomain();
  }
}
"#;
